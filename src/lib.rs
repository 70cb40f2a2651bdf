pub mod countdown;
pub mod cycle;
pub mod pace;
pub mod plain;
pub mod player;
pub mod spinner;
pub mod stepper;
pub mod ui;
