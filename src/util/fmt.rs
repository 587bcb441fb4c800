use std::fmt::{self, Debug, Display, Formatter};

/// Formats the entries of a cloneable iterator as a debug list, so collections can nest their
/// contents inside [`debug_struct`](Formatter::debug_struct) without collecting them first.
pub struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes `iter` in the shared textual form of every linear collection: `[e1, e2, ..., en]`, or
/// `[]` when there are no elements.
pub fn write_seq<I>(f: &mut Formatter<'_>, iter: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "[")?;
    for (index, item) in iter.into_iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}
