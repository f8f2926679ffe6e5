/// Mount lifecycle of the stories screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Screen is shown; kicks off the initial story fetch
    Mounted,
    /// Screen is torn down; in-flight work must be discarded
    Unmounted,
}
