pub mod input;
pub mod keypad;
pub mod phone;

pub use input::PhoneInput;
pub use keypad::{keypad_digit, map_letters, KEYPAD};
pub use phone::{validate, PhoneNumber};
