use cb_core::{CaseRecord, StageColumn};

use log::debug;

/// Authoritative in-memory distribution of cases into columns
///
/// Each column holds an ordered sequence of cards. A card id appears in at
/// most one column at any time; `relocate`/`reorder`/`remove` preserve that.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    columns: [Vec<CaseRecord>; 4],
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Partition records into columns by status
    ///
    /// Replaces all prior content. Records with a terminal or unmapped
    /// status are dropped from the visible set.
    pub fn load(&mut self, records: Vec<CaseRecord>) {
        self.columns = Default::default();
        for record in records {
            match StageColumn::for_status(record.status) {
                Some(column) => self.columns[column.rank()].push(record),
                None => {
                    debug!(
                        "Case {} has status {} and is not shown on the board",
                        record.id, record.status
                    );
                }
            }
        }
    }

    /// Cards currently in a column, in board order
    pub fn cards_in(&self, column: StageColumn) -> &[CaseRecord] {
        &self.columns[column.rank()]
    }

    /// The column currently holding a card
    pub fn find_container(&self, card_id: &str) -> Option<StageColumn> {
        StageColumn::ALL
            .into_iter()
            .find(|column| self.columns[column.rank()].iter().any(|c| c.id == card_id))
    }

    pub fn card(&self, card_id: &str) -> Option<&CaseRecord> {
        self.columns.iter().flatten().find(|c| c.id == card_id)
    }

    /// Position of a card within a column's sequence
    pub fn index_of(&self, column: StageColumn, card_id: &str) -> Option<usize> {
        self.columns[column.rank()]
            .iter()
            .position(|c| c.id == card_id)
    }

    /// Move a card across columns, inserting at `target_index` (clamped)
    ///
    /// No-op if the card is not actually in `from`. Exactly one copy of the
    /// card exists afterwards.
    pub fn relocate(
        &mut self,
        card_id: &str,
        from: StageColumn,
        to: StageColumn,
        target_index: usize,
    ) {
        let Some(position) = self.index_of(from, card_id) else {
            return;
        };
        let card = self.columns[from.rank()].remove(position);
        let destination = &mut self.columns[to.rank()];
        let index = target_index.min(destination.len());
        destination.insert(index, card);
    }

    /// Move a card within one column's sequence (indices clamped)
    pub fn reorder(&mut self, column: StageColumn, from_index: usize, to_index: usize) {
        let cards = &mut self.columns[column.rank()];
        if cards.is_empty() {
            return;
        }
        let from = from_index.min(cards.len() - 1);
        let card = cards.remove(from);
        let to = to_index.min(cards.len());
        cards.insert(to, card);
    }

    /// Delete a card from whichever column holds it
    pub fn remove(&mut self, card_id: &str) -> Option<CaseRecord> {
        let column = self.find_container(card_id)?;
        let position = self.index_of(column, card_id)?;
        Some(self.columns[column.rank()].remove(position))
    }

    /// Swap in an updated record at its current position
    pub fn replace(&mut self, record: CaseRecord) {
        for cards in &mut self.columns {
            if let Some(slot) = cards.iter_mut().find(|c| c.id == record.id) {
                *slot = record;
                return;
            }
        }
    }

    /// Total number of visible cards
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Per-column view of the cards matching a search query
    ///
    /// Matches the id by suffix and client/business names by substring, both
    /// case-insensitive. An empty or whitespace query matches every card.
    /// Never mutates the underlying store or its ordering.
    pub fn filtered_view(&self, query: &str) -> BoardView<'_> {
        let needle = query.trim().to_lowercase();
        let mut view = BoardView::default();
        for column in StageColumn::ALL {
            view.columns[column.rank()] = self.columns[column.rank()]
                .iter()
                .filter(|card| needle.is_empty() || matches_query(card, &needle))
                .collect();
        }
        view
    }
}

fn matches_query(card: &CaseRecord, needle: &str) -> bool {
    if card.id.to_lowercase().ends_with(needle) {
        return true;
    }
    let name_matches = |name: &Option<String>| {
        name.as_deref()
            .is_some_and(|n| n.to_lowercase().contains(needle))
    };
    name_matches(&card.client_name) || name_matches(&card.business_name)
}

/// Borrowed, search-filtered projection of the board
#[derive(Debug, Default)]
pub struct BoardView<'a> {
    columns: [Vec<&'a CaseRecord>; 4],
}

impl<'a> BoardView<'a> {
    pub fn cards_in(&self, column: StageColumn) -> &[&'a CaseRecord] {
        &self.columns[column.rank()]
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }
}
