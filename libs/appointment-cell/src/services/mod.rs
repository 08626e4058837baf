pub mod booking;
pub mod history;
pub mod slots;

pub use booking::BookingService;
pub use history::HistoryService;
pub use slots::SlotService;
