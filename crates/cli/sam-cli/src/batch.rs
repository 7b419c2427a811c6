//! The `positions.in` batch test harness (see the crate docs' batch-test
//! file format section): construct an automaton per recorded source text,
//! run every recorded search against it, and write a results CSV.

use std::fs::File;
use std::io::{BufRead, BufReader};

use sam::algorithms::suffix_automaton::{SuffixAutomaton, Transitions};
use sam::SamError;

struct Search {
    pattern: String,
    expected: usize,
}

struct Record {
    title: String,
    body: String,
    searches: Vec<Search>,
}

pub(crate) fn run<T: Transitions>(input: &str, output: &str) -> Result<(), SamError> {
    let records = parse(input)?;
    let mut results = Vec::new();

    for record in &records {
        log::info!(
            "constructing an automaton of size {} for {}...",
            record.body.len(),
            record.title
        );
        let mut sam = SuffixAutomaton::<T>::new(&record.body);
        log::info!(
            "computing suffix references for {} states...",
            sam.state_count()
        );

        for search in &record.searches {
            let positions = sam.positions(&search.pattern);
            let found = positions.len();
            let matches_body = positions.iter().all(|&p| {
                record.body.as_bytes()[p..p + search.pattern.len()] == *search.pattern.as_bytes()
            });
            let passed = found == search.expected && matches_body;

            if passed {
                log::info!(
                    "PASSED: searching for \"{}\" in {} found {} of {} positions and all matched the substring",
                    search.pattern, record.title, found, search.expected
                );
            } else {
                log::warn!(
                    "FAILED: searching for \"{}\" in {} found {} of {} expected positions",
                    search.pattern, record.title, found, search.expected
                );
            }

            results.push((
                record.title.clone(),
                search.pattern.clone(),
                found,
                search.expected,
                passed,
            ));
        }
    }

    write_csv(output, &results)
}

fn parse(path: &str) -> Result<Vec<Record>, SamError> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();
    let mut line_no = 0usize;
    let mut next_line = |lines: &mut std::io::Lines<BufReader<File>>| -> Result<Option<String>, SamError> {
        match lines.next() {
            Some(line) => {
                line_no += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    };

    let mut records = Vec::new();
    while let Some(title) = next_line(&mut lines)? {
        let body = next_line(&mut lines)?
            .ok_or_else(|| SamError::batch_format(line_no + 1, "expected a body line"))?;
        let count_line = next_line(&mut lines)?
            .ok_or_else(|| SamError::batch_format(line_no + 1, "expected a search count"))?;
        let count: usize = count_line
            .trim()
            .parse()
            .map_err(|_| SamError::batch_format(line_no, "search count is not an integer"))?;

        let mut searches = Vec::with_capacity(count);
        for _ in 0..count {
            let pattern = next_line(&mut lines)?
                .ok_or_else(|| SamError::batch_format(line_no + 1, "expected a search pattern"))?;
            let expected_line = next_line(&mut lines)?.ok_or_else(|| {
                SamError::batch_format(line_no + 1, "expected an expected-count line")
            })?;
            let expected: usize = expected_line
                .trim()
                .parse()
                .map_err(|_| SamError::batch_format(line_no, "expected count is not an integer"))?;
            searches.push(Search { pattern, expected });
        }

        records.push(Record {
            title,
            body,
            searches,
        });
    }

    Ok(records)
}

fn write_csv(
    path: &str,
    results: &[(String, String, usize, usize, bool)],
) -> Result<(), SamError> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(["Source Title", "Search String", "Found", "Expected", "Result"])
        .map_err(SamError::invalid_input)?;
    for (title, pattern, found, expected, passed) in results {
        writer
            .write_record([
                title.as_str(),
                pattern.as_str(),
                &found.to_string(),
                &expected.to_string(),
                if *passed { "passed" } else { "failed" },
            ])
            .map_err(SamError::invalid_input)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn parses_and_scores_a_small_batch_file() {
        let mut file = tempfile_with_contents(
            "Title A\nabcbc\n1\nbc\n2\n",
        );
        let records = parse(file.path_str()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Title A");
        assert_eq!(records[0].body, "abcbc");
        assert_eq!(records[0].searches.len(), 1);
        assert_eq!(records[0].searches[0].pattern, "bc");
        assert_eq!(records[0].searches[0].expected, 2);
        file.close();
    }

    struct TempFile {
        path: std::path::PathBuf,
    }

    impl TempFile {
        fn path_str(&self) -> &str {
            self.path.to_str().unwrap()
        }

        fn close(self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    fn tempfile_with_contents(contents: &str) -> TempFile {
        let path = std::env::temp_dir().join(format!(
            "sam-cli-batch-test-{}.in",
            std::process::id()
        ));
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        TempFile { path }
    }
}
