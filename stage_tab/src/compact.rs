//! Overlap distinct blocks into stage2
//! 将不同块重叠合并为 stage2

use crate::{
  codec::Blocks,
  error::{Error, Result},
};

/// Raw stage1 offsets and merged stage2 of stage3 indexes
/// 原始 stage1 偏移与合并后的 stage2（stage3 索引）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compact {
  pub stage1: Vec<u64>,
  pub stage2: Vec<u64>,
}

pub fn compact(blocks: &Blocks) -> Result<Compact> {
  let stage2 = superarray::merge(blocks.li.clone());

  let offsets = blocks
    .li
    .iter()
    .enumerate()
    .map(|(block, li)| {
      superarray::find(li, &stage2)
        .map(|off| off as u64)
        .ok_or(Error::BlockNotFound { block })
    })
    .collect::<Result<Vec<_>>>()?;

  let stage1 = blocks
    .pos
    .iter()
    .map(|&block| {
      offsets
        .get(block)
        .copied()
        .ok_or(Error::BlockNotFound { block })
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(Compact { stage1, stage2 })
}
