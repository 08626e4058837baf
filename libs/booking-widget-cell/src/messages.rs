pub const LOGIN_TO_BOOK: &str = "🔒 You must Login or Register to book an appointment!";
pub const LOGIN_TO_VIEW_BOOKINGS: &str = "🔒 Please Login to view your bookings.";
pub const CONNECTION_ERROR: &str = "❌ Error connecting to server";
pub const REGISTERED: &str = "Registration Successful! Please Login now.";
pub const SERVER_ERROR: &str = "Server Error";
pub const LOGGED_OUT_LABEL: &str = "Login / Register";

pub fn booked(name: &str) -> String {
    format!("✅ Success! Appointment booked for {}.", name)
}

pub fn rejected(message: &str) -> String {
    format!("❌ {}", message)
}

pub fn confirm_logout(username: &str) -> String {
    format!("Logged in as {}. Do you want to logout?", username)
}

pub fn logged_in_label(username: &str) -> String {
    format!("Logout ({})", username)
}
