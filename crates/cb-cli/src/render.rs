use cb_board::BoardState;
use cb_core::{CaseRecord, StageColumn};

/// Print the board as four lanes, optionally filtered by a search query
pub fn print_board(board: &BoardState, query: &str) {
    let view = board.filtered_view(query);
    for column in StageColumn::ALL {
        let cards = view.cards_in(column);
        println!("{} ({})", column.title(), cards.len());
        for card in cards {
            println!("  {}", card_line(card));
        }
        println!();
    }
}

fn card_line(card: &CaseRecord) -> String {
    let mut line = card.id.clone();

    let who = card
        .client_name
        .as_deref()
        .or(card.business_name.as_deref())
        .unwrap_or_else(|| card.created_by.display_name());
    line.push_str(&format!("  {who}"));

    line.push_str(&format!(
        "  total {}  items {}",
        card.grand_total, card.item_count
    ));
    if let Some(lead_time) = &card.lead_time {
        line.push_str(&format!("  due {lead_time}"));
    }
    line
}
