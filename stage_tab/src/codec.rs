//! Block codec: split values into blocks, dedup values and blocks
//! 块编解码：将值切分为块，对值与块去重

use hashlink::LinkedHashMap;

use crate::{
  error::{Error, Result},
  width::Width,
};

/// Deduplicated blocks of one value sequence
/// 值序列去重后的块
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Blocks {
  /// Distinct blocks of stage3 indexes, first-seen order
  /// 按首次出现顺序的不同块（元素为 stage3 索引）
  pub li: Vec<Vec<u64>>,
  /// Distinct block index of every block position
  /// 每个块位置对应的不同块索引
  pub pos: Vec<usize>,
  /// Distinct values, first-seen order
  /// 按首次出现顺序的不同值
  pub stage3: Vec<u64>,
}

/// Split `values` into `block_size` blocks
/// 将 `values` 切分为 `block_size` 大小的块
///
/// Values are normalized to stage3 indexes first, blocks are compared on the
/// normalized form. The last block may be shorter.
/// 值先归一化为 stage3 索引，再按归一化结果比较块。最后一块可以更短。
pub fn split(values: &[u64], block_size: usize, width: Width) -> Result<Blocks> {
  if block_size == 0 {
    return Err(Error::ZeroBlockSize);
  }

  let limit = width.max();
  let mut value_pos: LinkedHashMap<u64, usize> = LinkedHashMap::new();
  let mut block_pos: LinkedHashMap<Vec<u64>, usize> = LinkedHashMap::new();
  let mut pos = Vec::with_capacity(values.len().div_ceil(block_size));

  for (n, chunk) in values.chunks(block_size).enumerate() {
    let mut block = Vec::with_capacity(chunk.len());
    for (i, &value) in chunk.iter().enumerate() {
      if value > limit {
        return Err(Error::ValueTooWide {
          key: n * block_size + i,
          value,
          width,
        });
      }
      block.push(first_seen(&mut value_pos, value) as u64);
    }
    pos.push(first_seen(&mut block_pos, block));
  }

  Ok(Blocks {
    li: block_pos.into_iter().map(|(block, _)| block).collect(),
    pos,
    stage3: value_pos.into_iter().map(|(value, _)| value).collect(),
  })
}

/// Index of `key` in first-seen order, inserting it at the back if new
/// 按首次出现顺序返回 `key` 的索引，新键追加到末尾
///
/// `entry().or_insert` moves an existing key to the back, `get` keeps order.
/// `entry().or_insert` 会把已有键移到末尾，`get` 不改变顺序。
fn first_seen<K: std::hash::Hash + Eq>(map: &mut LinkedHashMap<K, usize>, key: K) -> usize {
  if let Some(&index) = map.get(&key) {
    return index;
  }
  let index = map.len();
  map.insert(key, index);
  index
}
