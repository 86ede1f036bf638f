//! Replay the lookup against the source values
//! 以源值回放查表过程

use log::info;

use crate::{
  error::{Error, Result},
  table::{Stage, StageId, Table},
};

#[inline]
fn at(stage: &Stage, id: StageId, key: usize, index: u64) -> Result<u64> {
  usize::try_from(index)
    .ok()
    .and_then(|i| stage.li.get(i))
    .copied()
    .ok_or(Error::OutOfRange {
      key,
      stage: id,
      index,
      len: stage.len(),
    })
}

/// Look up `key`, reporting which stage went out of range
/// 查找 `key`，越界时报告出错阶段
pub fn lookup(table: &Table, key: usize) -> Result<u64> {
  let block_size = table.block_size;
  if block_size == 0 {
    return Err(Error::ZeroBlockSize);
  }

  let v1 = at(&table.stage1, StageId::Stage1, key, (key / block_size) as u64)?;
  let off = match &table.stage2_offsets {
    Some(offsets) => at(offsets, StageId::Stage2Offsets, key, v1)?,
    None => v1,
  };
  let v2 = at(
    &table.stage2,
    StageId::Stage2,
    key,
    off.saturating_add((key % block_size) as u64),
  )?;
  match &table.stage3 {
    Some(stage3) => at(stage3, StageId::Stage3, key, v2),
    None => Ok(v2),
  }
}

/// Check every key of `values` against `table`
/// 逐键校验 `table` 与 `values` 一致
pub fn validate(values: &[u64], table: &Table) -> Result<()> {
  for (key, &expect) in values.iter().enumerate() {
    let got = lookup(table, key)?;
    if got != expect {
      return Err(Error::Mismatch { key, expect, got });
    }
  }
  info!(
    "validated {} keys, block_size {}, {} bytes",
    values.len(),
    table.block_size,
    table.total_size
  );
  Ok(())
}
