//! Word-list input: two line-oriented files consumed pairwise in lockstep.
//!
//! One word per line. Lines are trimmed and blank lines are skipped
//! independently per stream, so list formatting never shifts the pairing.
//! Generation ends when either list runs out; leftover words in the longer
//! list are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use anyhow::{Context, Result};

type LineSource = Lines<BufReader<File>>;

/// Pairwise iterator over the from/to word lists.
#[derive(Debug)]
pub struct WordPairs {
    from: LineSource,
    to: LineSource,
}

impl WordPairs {
    /// Open both word lists for lockstep reading.
    pub fn open(from_path: &Path, to_path: &Path) -> Result<Self> {
        let from = File::open(from_path)
            .with_context(|| format!("opening from-wordlist {}", from_path.display()))?;
        let to = File::open(to_path)
            .with_context(|| format!("opening to-wordlist {}", to_path.display()))?;
        Ok(Self {
            from: BufReader::new(from).lines(),
            to: BufReader::new(to).lines(),
        })
    }
}

fn next_word(lines: &mut LineSource, label: &str) -> Option<Result<String>> {
    for line in lines {
        match line {
            Ok(text) => {
                let word = text.trim();
                if !word.is_empty() {
                    return Some(Ok(word.to_string()));
                }
            }
            Err(e) => {
                return Some(Err(
                    anyhow::Error::new(e).context(format!("reading {label} word list"))
                ));
            }
        }
    }
    None
}

impl Iterator for WordPairs {
    type Item = Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let from = match next_word(&mut self.from, "from")? {
            Ok(word) => word,
            Err(e) => return Some(Err(e)),
        };
        let to = match next_word(&mut self.to, "to")? {
            Ok(word) => word,
            Err(e) => return Some(Err(e)),
        };
        Some(Ok((from, to)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_lists(from: &str, to: &str) -> (tempfile::TempDir, WordPairs) {
        let dir = tempfile::tempdir().unwrap();
        let from_path = dir.path().join("from.txt");
        let to_path = dir.path().join("to.txt");
        fs::write(&from_path, from).unwrap();
        fs::write(&to_path, to).unwrap();
        let pairs = WordPairs::open(&from_path, &to_path).unwrap();
        (dir, pairs)
    }

    fn collect(pairs: WordPairs) -> Vec<(String, String)> {
        pairs.map(|p| p.unwrap()).collect()
    }

    #[test]
    fn test_pairs_in_lockstep() {
        let (_dir, pairs) = write_lists("cat\ndog\n", "gato\nperro\n");
        assert_eq!(
            collect(pairs),
            [
                ("cat".to_string(), "gato".to_string()),
                ("dog".to_string(), "perro".to_string()),
            ]
        );
    }

    #[test]
    fn test_shorter_list_ends_generation() {
        let (_dir, pairs) = write_lists("cat\ndog\nhouse\n", "gato\n");
        assert_eq!(collect(pairs), [("cat".to_string(), "gato".to_string())]);
    }

    #[test]
    fn test_blank_lines_skipped_per_stream() {
        // A blank line in one list must not consume a word from the other.
        let (_dir, pairs) = write_lists("cat\n\n\ndog\n", "gato\nperro\n\n");
        assert_eq!(
            collect(pairs),
            [
                ("cat".to_string(), "gato".to_string()),
                ("dog".to_string(), "perro".to_string()),
            ]
        );
    }

    #[test]
    fn test_words_are_trimmed() {
        let (_dir, pairs) = write_lists("  cat \n", "\tgato\n");
        assert_eq!(collect(pairs), [("cat".to_string(), "gato".to_string())]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let to_path = dir.path().join("to.txt");
        fs::write(&to_path, "gato\n").unwrap();
        let err = WordPairs::open(&dir.path().join("nope.txt"), &to_path).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }
}
