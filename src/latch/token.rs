/// Memory-protection settings a boot-time override may target.
///
/// The set is closed on purpose: the register protocol can only answer for
/// tokens given an explicit arm in `OverrideLatch::read`, so a new setting
/// is a compile-checked extension rather than a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingToken {
    /// Master on/off state for the memory-protection feature set. The only
    /// token the register currently carries.
    GlobalToggle,
    /// Null-pointer detection guard page.
    NullDetection,
    /// Heap guard page insertion.
    HeapGuard,
}
