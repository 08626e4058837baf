use colored::Colorize;

use appointment_cell::models::{HistoryList, SlotContainer, LOADING_PLACEHOLDER};
use booking_widget_cell::{AuthModal, WidgetState};

pub fn page(state: &WidgetState) {
    println!();
    println!("{}  {}", "Clinic booking".bold(), format!("[{}]", state.auth_button_label).cyan());
    println!("Date: {}", state.date);
    if !state.patient_name.is_empty() {
        println!("Patient: {}", state.patient_name);
    }
    slots(&state.slots);
    if let Some(message) = &state.status_message {
        println!("{}", message.red());
    }
}

pub fn slots(container: &SlotContainer) {
    match container {
        SlotContainer::Loading => println!("{}", LOADING_PLACEHOLDER.dimmed()),
        SlotContainer::Failed(message) => println!("{}", message.red()),
        SlotContainer::Ready(board) if board.is_empty() => {
            println!("{}", "No slots for this date.".dimmed())
        }
        SlotContainer::Ready(board) => {
            let cells: Vec<String> = board.buttons()
                .iter()
                .map(|button| {
                    let cell = format!("[{}] {}", button.id, button.label);
                    if button.disabled {
                        cell.red().dimmed().to_string()
                    } else if button.selected {
                        cell.green().bold().to_string()
                    } else {
                        cell
                    }
                })
                .collect();
            println!("{}", cells.join("   "));
        }
    }
}

pub fn auth_modal(modal: &AuthModal) {
    println!();
    let hint = format!("(:toggle - {}, :cancel - close)", modal.toggle_text());
    println!("{}  {}", modal.title().bold(), hint.dimmed());
    if let Some(message) = &modal.message {
        println!("{}", message.red());
    }
}

pub fn history(list: &HistoryList) {
    println!();
    println!("{}", "My bookings".bold());
    match list {
        HistoryList::Rows(rows) => {
            for row in rows {
                println!(
                    "  {}  {}  {}  {}",
                    row.time.bold(),
                    row.date_label,
                    row.doctor_name,
                    row.badge.green()
                );
            }
        }
        HistoryList::Failed(message) => println!("  {}", message.red()),
        other => {
            if let Some(message) = other.message() {
                println!("  {}", message.dimmed());
            }
        }
    }
}
