/// The base trait for any value that can appear in a variable's domain.
///
/// This is a marker trait: any type that is cloneable, debuggable,
/// equatable and hashable qualifies. For Sudoku the value type is simply
/// `char`, but the solver is agnostic — enums, integers or richer types
/// all work.
pub trait Value: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> Value for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
