// pocketcalc state managers
// Managers own mutable state: the calculation history and the calculator keypad.

pub mod calculator_pad;
pub mod history_manager;
