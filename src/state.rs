#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TimerState {
    Stopped, // No timer handle exists
    Running, // One recurring timer handle is live
}
