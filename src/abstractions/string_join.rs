use std::iter::once;
use std::fmt::Display;

/**
Interleave `sep(&previous)` between the items of an iterator. (C.f. `Vec::join(…)`, which needs a slice.)

From: https://stackoverflow.com/a/66951473
 */
fn join_iter<T>(mut iter: impl Iterator<Item = T>, sep: impl Fn(&T) -> T)
                -> impl Iterator<Item = T>
{
  iter
      .next()
      .into_iter()
      .chain(iter.flat_map(move |s| once(sep(&s)).chain(once(s))))
}

/// Join a list of things that can be displayed as string with a given separator.
/// An empty list joins to the empty string.
pub fn join_string<T:Display>(iter: impl Iterator<Item = T>, sep: &str) -> String {
  join_iter(iter.map(|t| t.to_string()), |_| sep.to_string()).collect::<String>()
}
