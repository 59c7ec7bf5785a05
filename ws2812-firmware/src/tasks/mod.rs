// Task-Modul: Enthält alle Embassy Tasks
//
// Der Render selbst ist synchron; der Task nutzt den Executor nur für
// die Pause zwischen zwei Frames.

pub mod strip_chase;

// Re-export Tasks für einfachen Import
pub use strip_chase::strip_chase_task;
