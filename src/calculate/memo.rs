//! Keyword counts over free-text memos.
//!
//! Only counts are reported. Nothing here infers why a match went the way it did.

use serde::{Deserialize, Serialize};

use super::{calculate_rate, round_to_tenth};
use crate::models::MatchRecord;

/// Keywords looked for in memos, matched as case-insensitive substrings.
pub const MEMO_KEYWORDS: [&str; 5] = ["chase", "generator", "rescue", "camp", "mistake"];

/// Occurrences a keyword needs before it is reported.
pub const KEYWORD_THRESHOLD: u32 = 3;

/// Average memo length (in characters) at or above which memos count as detailed.
pub const DETAILED_MEMO_CHARS: f64 = 20.0;

/// Average memo length at or below which memos count as concise.
pub const CONCISE_MEMO_CHARS: f64 = 8.0;

/// A keyword and its total occurrences across all memos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoKeyword {
    pub keyword: String,
    pub count: u32,
}

/// Length class of the average memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoLength {
    Detailed,
    Concise,
    Neither,
}

impl MemoLength {
    pub fn classify(average_chars: f64) -> Self {
        if average_chars >= DETAILED_MEMO_CHARS {
            MemoLength::Detailed
        } else if average_chars <= CONCISE_MEMO_CHARS {
            MemoLength::Concise
        } else {
            MemoLength::Neither
        }
    }
}

/// Result of scanning the memos of a record list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoScan {
    /// Records with a non-blank memo
    pub memo_count: u32,

    /// Share of all records carrying a memo (0.0 to 100.0)
    pub memo_share: f64,

    /// Keywords at or above the reporting threshold, in keyword-list order
    pub keywords: Vec<MemoKeyword>,

    /// Mean memo length in characters (0.0 without memos)
    pub average_length: f64,

    /// `None` without memos
    pub length: Option<MemoLength>,
}

/// Count keyword occurrences and memo lengths.
pub fn scan_memos(records: &[&MatchRecord]) -> MemoScan {
    let memos: Vec<&str> = records.iter().filter_map(|r| r.memo_text()).collect();
    let memo_count = memos.len() as u32;

    let text = memos.join(" ").to_lowercase();
    let keywords = MEMO_KEYWORDS
        .iter()
        .map(|kw| MemoKeyword {
            keyword: kw.to_string(),
            count: text.matches(kw).count() as u32,
        })
        .filter(|kw| kw.count >= KEYWORD_THRESHOLD)
        .collect();

    let (average_length, length) = if memos.is_empty() {
        (0.0, None)
    } else {
        let total_chars: usize = memos.iter().map(|m| m.chars().count()).sum();
        let average = total_chars as f64 / memos.len() as f64;
        (round_to_tenth(average), Some(MemoLength::classify(average)))
    };

    MemoScan {
        memo_count,
        memo_share: calculate_rate(memo_count, records.len() as u32),
        keywords,
        average_length,
        length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SurvivorStatus::Died;
    use crate::models::{Killer, Outcome};
    use chrono::NaiveDate;

    fn game(memo: Option<&str>) -> MatchRecord {
        let record = MatchRecord::new(
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            Killer::Blight,
            Outcome::with_randoms(Died, [Died, Died, Died]),
        );
        match memo {
            Some(m) => record.with_memo(m),
            None => record,
        }
    }

    fn scan(records: &[MatchRecord]) -> MemoScan {
        let refs: Vec<&MatchRecord> = records.iter().collect();
        scan_memos(&refs)
    }

    #[test]
    fn test_keyword_at_threshold_is_reported() {
        let records = vec![
            game(Some("Rescue went fine")),
            game(Some("late rescue, then another RESCUE")),
            game(Some("rescue at gate")),
            game(None),
        ];
        let result = scan(&records);

        assert_eq!(
            result.keywords,
            vec![MemoKeyword {
                keyword: "rescue".to_string(),
                count: 4
            }]
        );
    }

    #[test]
    fn test_keyword_below_threshold_is_dropped() {
        let records = vec![game(Some("rescue")), game(Some("one more rescue"))];
        let result = scan(&records);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_memo_share_and_blank_memos() {
        let records = vec![game(Some("gen")), game(Some("   ")), game(None), game(Some(""))];
        let result = scan(&records);

        assert_eq!(result.memo_count, 1);
        assert_eq!(result.memo_share, 25.0);
    }

    #[test]
    fn test_memo_length_classes() {
        let concise = scan(&[game(Some("ok")), game(Some("bad luck"))]);
        assert_eq!(concise.length, Some(MemoLength::Concise));

        let detailed = scan(&[game(Some("lost the chase at shack, should have left early"))]);
        assert_eq!(detailed.length, Some(MemoLength::Detailed));

        let neither = scan(&[game(Some("looped well"))]);
        assert_eq!(neither.length, Some(MemoLength::Neither));
    }

    #[test]
    fn test_no_memos() {
        let result = scan(&[game(None)]);
        assert_eq!(result.memo_count, 0);
        assert_eq!(result.memo_share, 0.0);
        assert_eq!(result.length, None);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_memo_length_counts_characters() {
        // Eight multi-byte characters
        let result = scan(&[game(Some("チェイス失敗した"))]);
        assert_eq!(result.average_length, 8.0);
        assert_eq!(result.length, Some(MemoLength::Concise));
    }
}
