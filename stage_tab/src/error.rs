//! Error types for stage_tab
//! stage_tab 错误类型
//!
//! Every variant is fatal: a table that failed any check must never be emitted.
//! 所有错误均不可恢复：任何检查失败的表都不得输出。

use thiserror::Error;

use crate::{table::StageId, width::Width};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("block size must be > 0 / 块大小必须 > 0")]
  ZeroBlockSize,

  #[error("unknown width: {0} bytes")]
  UnknownWidth(u8),

  #[error("key {key:#X}: value {value:#X} does not fit {width:?} / 值超出声明宽度")]
  ValueTooWide { key: usize, value: u64, width: Width },

  #[error("conf {name} = {value}: {why}")]
  Conf {
    name: &'static str,
    value: usize,
    why: &'static str,
  },

  #[error("block {block} not found in merged stage2 / 合并后的 stage2 中找不到块")]
  BlockNotFound { block: usize },

  #[error("stage2 offset {offset} missing from unique offsets / 唯一偏移表缺少偏移")]
  OffsetNotFound { offset: u64 },

  #[error("stage3 index {index} missing / stage3 索引缺失")]
  MissingValue { index: u64 },

  #[error("key {key:#X}: expect {expect:#X}, got {got:#X} / 查表结果不一致")]
  Mismatch { key: usize, expect: u64, got: u64 },

  #[error("key {key:#X}: {stage:?} index {index} out of range (len {len})")]
  OutOfRange {
    key: usize,
    stage: StageId,
    index: u64,
    len: usize,
  },

  #[error("lane {lane}: index {index:#X} does not fit 7 bits / 索引超出 7 位")]
  LaneOverflow { lane: usize, index: u32 },

  #[error("too many lanes: {0} (max 8)")]
  TooManyLanes(usize),

  #[error("special mapping length {0}, expect 2 or 3 / 特殊映射长度应为 2 或 3")]
  MappingLen(usize),

  #[error("code point {0:#X} does not fit 21 bits")]
  CodePointOverflow(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
