use aok::{OK, Void};
use log::trace;
use stage_tab::{Error, Width, codec::split};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_split() -> Void {
  let blocks = split(&[5, 5, 5, 5, 7, 7, 7, 7, 5, 5, 5, 5], 4, Width::W1)?;
  assert_eq!(blocks.li, [vec![0, 0, 0, 0], vec![1, 1, 1, 1]]);
  assert_eq!(blocks.pos, [0, 1, 0]);
  assert_eq!(blocks.stage3, [5, 7]);
  trace!("{blocks:?}");
  OK
}

#[test]
fn test_repeat_one_value() -> Void {
  for n in [1usize, 7, 64, 1000] {
    let values = vec![42u64; n];
    let blocks = split(&values, 16, Width::W1)?;
    assert_eq!(blocks.stage3, [42]);
    // full blocks dedup to one, a short tail is its own block
    // 满块去重为一个，短尾块单独成块
    let expect = 1 + usize::from(n > 16 && n % 16 != 0);
    assert_eq!(blocks.li.len(), expect, "n={n}");
  }
  OK
}

#[test]
fn test_short_tail() -> Void {
  let blocks = split(&[1, 2, 3, 1, 2], 3, Width::W1)?;
  assert_eq!(blocks.stage3, [1, 2, 3]);
  assert_eq!(blocks.li, [vec![0, 1, 2], vec![0, 1]]);
  assert_eq!(blocks.pos, [0, 1]);

  // tail [0] never equals the full block [0, 0, 0]
  // 尾块 [0] 不等于满块 [0, 0, 0]
  let blocks = split(&[1, 1, 1, 1], 3, Width::W1)?;
  assert_eq!(blocks.li, [vec![0, 0, 0], vec![0]]);
  assert_eq!(blocks.pos, [0, 1]);
  OK
}

#[test]
fn test_compare_normalized() -> Void {
  // first-seen order of values decides the indexes
  // 值的首次出现顺序决定索引
  let blocks = split(&[9, 3, 3, 9, 9, 3], 2, Width::W1)?;
  assert_eq!(blocks.stage3, [9, 3]);
  assert_eq!(blocks.li, [vec![0, 1], vec![1, 0]]);
  assert_eq!(blocks.pos, [0, 1, 0]);
  OK
}

/// Every normalized index points back at its own value
/// 每个归一化索引都指回自身的值
fn check_indexes(values: &[u64], block_size: usize) -> Void {
  let blocks = split(values, block_size, Width::W8)?;
  for (n, chunk) in values.chunks(block_size).enumerate() {
    let block = &blocks.li[blocks.pos[n]];
    assert_eq!(block.len(), chunk.len());
    for (&index, &value) in block.iter().zip(chunk) {
      assert_eq!(blocks.stage3[index as usize], value, "block {n}");
    }
  }
  // first-seen order, no repeats
  // 首次出现顺序，无重复
  let mut seen = Vec::new();
  for &value in values {
    if !seen.contains(&value) {
      seen.push(value);
    }
  }
  assert_eq!(blocks.stage3, seen);
  OK
}

#[test]
fn test_index_maps_back() -> Void {
  check_indexes(&[1, 2, 3, 1, 2], 3)?;
  check_indexes(&(0..64).map(|i| i * 7 % 5).collect::<Vec<_>>(), 4)?;
  check_indexes(&[4, 4, 9, 1, 9, 4, 1, 1, 4, 9], 2)?;

  let mut rng = fastrand::Rng::with_seed(11);
  for _ in 0..50 {
    let n = rng.usize(0..300);
    let values: Vec<u64> = (0..n).map(|_| rng.u64(0..20)).collect();
    check_indexes(&values, rng.usize(1..17))?;
  }
  OK
}

#[test]
fn test_value_too_wide() -> Void {
  let err = split(&[1, 256], 4, Width::W1).unwrap_err();
  assert_eq!(
    err,
    Error::ValueTooWide {
      key: 1,
      value: 256,
      width: Width::W1
    }
  );
  assert!(split(&[1, 256], 4, Width::W2).is_ok());
  assert!(split(&[u64::MAX], 4, Width::W8).is_ok());
  OK
}

#[test]
fn test_zero_block_size() -> Void {
  assert_eq!(split(&[1], 0, Width::W1).unwrap_err(), Error::ZeroBlockSize);
  assert_eq!(split(&[], 0, Width::W1).unwrap_err(), Error::ZeroBlockSize);
  OK
}

#[test]
fn test_width() -> Void {
  assert_eq!(Width::of(0), Width::W1);
  assert_eq!(Width::of(0xFF), Width::W1);
  assert_eq!(Width::of(0x100), Width::W2);
  assert_eq!(Width::of(0xFFFF), Width::W2);
  assert_eq!(Width::of(0x1_0000), Width::W4);
  assert_eq!(Width::of(0xFFFF_FFFF), Width::W4);
  assert_eq!(Width::of(0x1_0000_0000), Width::W8);
  assert_eq!(Width::of_max(&[]), Width::W1);
  assert_eq!(Width::of_max(&[3, 70000, 2]), Width::W4);
  assert_eq!(Width::from_u8(4)?, Width::W4);
  assert_eq!(Width::from_u8(3).unwrap_err(), Error::UnknownWidth(3));
  assert_eq!(Width::W8.bytes(), 8);
  OK
}
