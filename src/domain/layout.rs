use crate::domain::models::Block;
use crate::domain::time_format::{format_hm, format_hm_24};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutItem {
    Period {
        name: String,
        start: f64,
        end: f64,
        start_label: String,
        end_label: String,
        start_label_24: String,
        end_label_24: String,
    },
    Break {
        start: f64,
        end: f64,
    },
}

impl LayoutItem {
    fn period(block: &Block) -> Self {
        Self::Period {
            name: block.name.clone(),
            start: block.start,
            end: block.end,
            start_label: format_hm(block.start),
            end_label: format_hm(block.end),
            start_label_24: format_hm_24(block.start),
            end_label_24: format_hm_24(block.end),
        }
    }

    pub fn start(&self) -> f64 {
        match self {
            Self::Period { start, .. } | Self::Break { start, .. } => *start,
        }
    }

    pub fn end(&self) -> f64 {
        match self {
            Self::Period { end, .. } | Self::Break { end, .. } => *end,
        }
    }

    pub fn weight(&self) -> f64 {
        self.end() - self.start()
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break { .. })
    }
}

pub fn layout_blocks(blocks: &[Block]) -> Vec<LayoutItem> {
    let mut items = Vec::with_capacity(blocks.len() * 2);
    let mut previous_end: Option<f64> = None;
    for block in blocks {
        if let Some(last_end) = previous_end {
            if last_end < block.start {
                items.push(LayoutItem::Break {
                    start: last_end,
                    end: block.start,
                });
            }
        }
        items.push(LayoutItem::period(block));
        previous_end = Some(block.end);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::default_blocks;

    fn spans(items: &[LayoutItem]) -> Vec<(bool, f64, f64)> {
        items
            .iter()
            .map(|item| (item.is_break(), item.start(), item.end()))
            .collect()
    }

    #[test]
    fn layout_inserts_break_for_positive_gap() {
        let blocks = vec![
            Block::new("Homeroom", 555.0, 595.0),
            Block::new("Period 1", 600.0, 630.0),
        ];
        let items = layout_blocks(&blocks);
        assert_eq!(
            spans(&items),
            vec![
                (false, 555.0, 595.0),
                (true, 595.0, 600.0),
                (false, 600.0, 630.0)
            ]
        );
    }

    #[test]
    fn layout_skips_break_for_adjacent_blocks() {
        let blocks = vec![Block::new("A", 0.0, 30.0), Block::new("B", 30.0, 60.0)];
        let items = layout_blocks(&blocks);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| !item.is_break()));
    }

    #[test]
    fn layout_of_empty_schedule_is_empty() {
        assert!(layout_blocks(&[]).is_empty());
    }

    #[test]
    fn layout_weights_cover_the_whole_window() {
        let items = layout_blocks(&default_blocks());
        let total: f64 = items.iter().map(LayoutItem::weight).sum();
        assert_eq!(total, 870.0 - 555.0);
        assert_eq!(items.first().map(LayoutItem::start), Some(555.0));
        assert_eq!(items.last().map(LayoutItem::end), Some(870.0));
        assert_eq!(items.iter().filter(|item| item.is_break()).count(), 7);
    }

    #[test]
    fn period_items_carry_twelve_and_twenty_four_hour_labels() {
        let items = layout_blocks(&[Block::new("Period 4", 770.0, 800.0)]);
        match &items[0] {
            LayoutItem::Period {
                start_label,
                end_label,
                start_label_24,
                end_label_24,
                ..
            } => {
                assert_eq!(start_label, "12:50");
                assert_eq!(end_label, "1:20");
                assert_eq!(start_label_24, "12:50");
                assert_eq!(end_label_24, "13:20");
            }
            LayoutItem::Break { .. } => panic!("expected period"),
        }
    }
}
