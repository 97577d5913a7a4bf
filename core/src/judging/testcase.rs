use std::path::{Path, PathBuf};

/// One (input, expected-answer) file pair.
/// Admitted into the engine only when both files exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsTestcase {
    name: String,
    input_path: PathBuf,
    answer_path: PathBuf,
}

/// What the directory scan yields for one regular file of the input dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    Admitted(FsTestcase),
    /// File name of an input with no same-named file in the answer dir.
    MissingAnswer(String),
}

impl FsTestcase {
    pub fn new(
        name: impl Into<String>,
        input: impl Into<PathBuf>,
        answer: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            input_path: input.into(),
            answer_path: answer.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn answer_path(&self) -> &Path {
        &self.answer_path
    }

    /// Scans `input_dir` in OS enumeration order (deliberately not sorted)
    /// and pairs each regular file with the same-named file in `answer_dir`.
    /// At most `limit` regular files are considered; files lacking an answer
    /// still count toward the limit.
    pub fn discover(
        input_dir: impl AsRef<Path>,
        answer_dir: impl AsRef<Path>,
        limit: usize,
    ) -> fsutil::Result<Vec<Discovery>> {
        let mut res = Vec::new();
        for entry in fsutil::read_dir(&input_dir)?.filter_map(Result::ok) {
            if res.len() >= limit {
                break;
            }
            let Ok(ft) = entry.file_type() else {
                continue;
            };
            if !ft.is_file() {
                continue;
            }
            let answer_path = answer_dir.as_ref().join(entry.file_name());
            let name = entry.file_name().to_string_lossy().into_owned();
            if fsutil::is_regular_file(&answer_path) {
                res.push(Discovery::Admitted(Self::new(
                    name,
                    entry.path(),
                    answer_path,
                )));
            } else {
                res.push(Discovery::MissingAnswer(name));
            }
        }
        Ok(res)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    fn setup() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("in");
        let answer_dir = dir.path().join("ans");
        fs::create_dir(&input_dir).unwrap();
        fs::create_dir(&answer_dir).unwrap();
        (dir, input_dir, answer_dir)
    }

    #[test]
    fn pairs_inputs_with_same_named_answers() {
        let (_g, input_dir, answer_dir) = setup();
        fs::write(input_dir.join("t1.txt"), "1\n").unwrap();
        fs::write(answer_dir.join("t1.txt"), "1\n").unwrap();

        let found = FsTestcase::discover(&input_dir, &answer_dir, 20).unwrap();
        assert_eq!(found.len(), 1);
        match &found[0] {
            Discovery::Admitted(t) => {
                assert_eq!(t.name(), "t1.txt");
                assert_eq!(t.input_path(), input_dir.join("t1.txt"));
                assert_eq!(t.answer_path(), answer_dir.join("t1.txt"));
            }
            other => panic!("expected admission, got {:?}", other),
        }
    }

    #[test]
    fn input_without_answer_is_reported_not_admitted() {
        let (_g, input_dir, answer_dir) = setup();
        fs::write(input_dir.join("orphan.txt"), "1\n").unwrap();

        let found = FsTestcase::discover(&input_dir, &answer_dir, 20).unwrap();
        // The report carries the bare file name, not the joined path.
        assert_eq!(
            found,
            vec![Discovery::MissingAnswer("orphan.txt".to_owned())]
        );
    }

    #[test]
    fn considers_at_most_limit_files_counting_skipped_ones() {
        let (_g, input_dir, answer_dir) = setup();
        for i in 0..10 {
            let name = format!("t{}.txt", i);
            fs::write(input_dir.join(&name), "x").unwrap();
            if i % 2 == 0 {
                fs::write(answer_dir.join(&name), "x").unwrap();
            }
        }

        let found = FsTestcase::discover(&input_dir, &answer_dir, 4).unwrap();
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn directories_in_input_dir_are_ignored() {
        let (_g, input_dir, answer_dir) = setup();
        fs::create_dir(input_dir.join("subdir")).unwrap();
        fs::write(input_dir.join("t1.txt"), "1\n").unwrap();
        fs::write(answer_dir.join("t1.txt"), "1\n").unwrap();

        let found = FsTestcase::discover(&input_dir, &answer_dir, 20).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn unreadable_input_dir_is_an_error() {
        let (_g, input_dir, answer_dir) = setup();
        assert!(FsTestcase::discover(input_dir.join("missing"), &answer_dir, 20).is_err());
    }
}
