//! Block size tuning
//! 块大小调优
//!
//! Coarse grid first, then a few refine rounds around the best size, each
//! with a finer step. Not exhaustive: a bounded local search trading a few
//! bytes for search time.
//! 先粗网格搜索，再在最优值附近逐轮细化步长。非穷举，以少量字节换取搜索时间。

use log::{debug, info, warn};

use crate::{
  build,
  conf::Config,
  error::Result,
  table::Table,
  width::Width,
};

/// Receives `(done, total)` after each evaluated candidate
/// 每评估一个候选后接收 `(done, total)`
pub trait Progress {
  fn on(&mut self, done: usize, total: usize);
}

impl<F: FnMut(usize, usize)> Progress for F {
  #[inline]
  fn on(&mut self, done: usize, total: usize) {
    self(done, total)
  }
}

/// Progress sink that ignores everything
/// 忽略进度
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
  #[inline(always)]
  fn on(&mut self, _: usize, _: usize) {}
}

struct Search<'a, P: Progress> {
  values: &'a [u64],
  width: Width,
  progress: &'a mut P,
  done: usize,
  total: usize,
  best: Option<Table>,
}

impl<P: Progress> Search<'_, P> {
  /// Evaluate one round in order, its first smallest becomes the best
  /// 按顺序评估一轮候选，本轮第一个最小值成为最优
  ///
  /// A refine round contains the previous best size, so the size never grows.
  /// 细化轮包含上一轮最优大小，因此大小不会变大。
  fn pick(&mut self, li: &[usize]) -> Result<()> {
    let mut round: Option<Table> = None;
    for (&block_size, table) in li.iter().zip(run(self.values, li, self.width)) {
      let table = table?;
      self.done += 1;
      self.progress.on(self.done, self.total);
      debug!(
        "[{}/{}] block_size {block_size}: {} bytes",
        self.done, self.total, table.total_size
      );
      if round
        .as_ref()
        .is_none_or(|best| table.total_size < best.total_size)
      {
        round = Some(table);
      }
    }
    if round.is_some() {
      self.best = round;
    }
    Ok(())
  }

  #[inline]
  fn best_size(&self) -> usize {
    self.best.as_ref().map_or(0, |t| t.block_size)
  }
}

#[cfg(not(feature = "par"))]
fn run<'a>(
  values: &'a [u64],
  li: &'a [usize],
  width: Width,
) -> impl Iterator<Item = Result<Table>> + 'a {
  li.iter().map(move |&block_size| build(values, block_size, width))
}

#[cfg(feature = "par")]
fn run<'a>(
  values: &'a [u64],
  li: &'a [usize],
  width: Width,
) -> impl Iterator<Item = Result<Table>> + 'a {
  use rayon::prelude::*;
  // collect keeps candidate order
  li.par_iter()
    .map(|&block_size| build(values, block_size, width))
    .collect::<Vec<_>>()
    .into_iter()
}

/// Find the block size giving the smallest table
/// 查找生成最小表的块大小
pub fn tune(
  values: &[u64],
  width: Width,
  config: &Config,
  progress: &mut impl Progress,
) -> Result<Table> {
  config.check()?;
  if values.is_empty() {
    warn!("tune: empty value sequence");
  }

  let mut search = Search {
    values,
    width,
    progress,
    done: 0,
    total: config.plan(),
    best: None,
  };

  search.pick(&config.coarse())?;

  let mut step = config.step;
  while step >= config.min_step {
    let prev = step;
    step /= config.factor;
    let base = search.best_size();
    let li: Vec<usize> = (1..=config.neighbors)
      .filter_map(|n| (base + n * step).checked_sub(prev))
      .filter(|&block_size| block_size > 0)
      .collect();
    search.pick(&li)?;
  }

  // coarse() is never empty once check() passed
  let best = search.best.ok_or(crate::error::Error::ZeroBlockSize)?;
  info!(
    "tuned block_size {}: {} bytes",
    best.block_size, best.total_size
  );
  Ok(best)
}
