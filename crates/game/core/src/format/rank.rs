//! Leaderboard rendering.

use super::substitute;
use crate::config::SyncConfig;
use crate::env::MessageOracle;
use crate::event::RankEvent;

/// Message id of the "Rank" label in the header.
pub const RANK_LABEL_MSG: u32 = 2383;
/// Message id of the "Points" suffix on each entry.
pub const RANK_POINTS_MSG: u32 = 2385;

const UNKNOWN_TITLE: &str = "Unknown";
const MISSING_NAME: &str = "None";

/// Renders a header line followed by exactly ten entry lines.
///
/// Missing names render as `None` and missing points as `0`.
pub fn format_rank(event: &RankEvent, messages: &dyn MessageOracle) -> Vec<String> {
    let title = event
        .category
        .title_message()
        .map_or_else(|| UNKNOWN_TITLE.to_owned(), |id| messages.message(id));

    let mut lines = Vec::with_capacity(SyncConfig::RANK_ENTRIES + 1);
    lines.push(format!(
        "=========== {title} {} ===========",
        messages.message(RANK_LABEL_MSG)
    ));

    let template = format!("[%rank%] %name% : %point% {}", messages.message(RANK_POINTS_MSG));
    for i in 0..SyncConfig::RANK_ENTRIES {
        let name = event.names.get(i).map_or(MISSING_NAME, String::as_str);
        let points = event.points.get(i).copied().unwrap_or(0);

        let line = substitute(&template, "%rank%", i + 1);
        let line = substitute(&line, "%name%", name);
        lines.push(substitute(&line, "%point%", points));
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::event::RankCategory;

    struct Table(HashMap<u32, &'static str>);

    impl MessageOracle for Table {
        fn get(&self, id: u32) -> Option<&str> {
            self.0.get(&id).copied()
        }
    }

    fn table() -> Table {
        Table(HashMap::from([
            (2383, "Rank"),
            (2385, "Points"),
            (2386, "BlackSmith"),
            (2388, "Taekwon"),
        ]))
    }

    #[test]
    fn pads_to_ten_entries() {
        let mut event = RankEvent::new(RankCategory::Blacksmith);
        event.push("Alice", 120);
        event.push("Bob", 90);
        event.push("Carol", 15);

        let lines = format_rank(&event, &table());
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "=========== BlackSmith Rank ===========");
        assert_eq!(lines[1], "[1] Alice : 120 Points");
        assert_eq!(lines[3], "[3] Carol : 15 Points");
        assert_eq!(lines[4], "[4] None : 0 Points");
        assert_eq!(lines[10], "[10] None : 0 Points");
    }

    #[test]
    fn killer_rank_has_unknown_title() {
        let lines = format_rank(&RankEvent::new(RankCategory::Killer), &table());
        assert_eq!(lines[0], "=========== Unknown Rank ===========");
    }

    #[test]
    fn missing_title_message_uses_placeholder() {
        let lines = format_rank(&RankEvent::new(RankCategory::Alchemist), &table());
        assert_eq!(lines[0], "=========== [msg 2387] Rank ===========");
    }
}
