/// Offset of the first occurrence of `sub` in `hay`
/// `sub` 在 `hay` 中首次出现的偏移
#[inline]
pub fn find<T: Eq>(sub: &[T], hay: &[T]) -> Option<usize> {
  if sub.is_empty() {
    return Some(0);
  }
  hay.windows(sub.len()).position(|w| w == sub)
}
