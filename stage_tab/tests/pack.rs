use aok::{OK, Void};
use stage_tab::{
  Error,
  pack::{Lane, pack_lanes, pack_mapping, unpack_lane, unpack_mapping},
};

#[test]
fn test_lanes() -> Void {
  // lowercase, uppercase, titlecase
  let v = pack_lanes(&[Lane::Simple(3), Lane::Special(0x10), Lane::Simple(0)])?;
  assert_eq!(v, 0x00_90_03);
  assert_eq!(unpack_lane(v, 0), Some(Lane::Simple(3)));
  assert_eq!(unpack_lane(v, 1), Some(Lane::Special(0x10)));
  assert_eq!(unpack_lane(v, 2), Some(Lane::Simple(0)));
  assert_eq!(unpack_lane(v, 8), None);
  assert_eq!(pack_lanes(&[])?, 0);
  OK
}

#[test]
fn test_lane_overflow() -> Void {
  assert!(pack_lanes(&[Lane::Simple(0x7F), Lane::Special(0x7F)]).is_ok());
  assert_eq!(
    pack_lanes(&[Lane::Simple(1), Lane::Special(0x80)]).unwrap_err(),
    Error::LaneOverflow {
      lane: 1,
      index: 0x80
    }
  );
  assert_eq!(
    pack_lanes(&[Lane::Simple(0); 9]).unwrap_err(),
    Error::TooManyLanes(9)
  );
  OK
}

#[test]
fn test_mapping() -> Void {
  // U+00DF -> "SS"
  let w = pack_mapping(&[0x53, 0x53])?;
  assert_eq!(w, (0x53 << 21) | 0x53);
  assert_eq!(unpack_mapping(w), ([0x53, 0x53, 0], 2));

  // U+0390 -> 3 code points
  let w = pack_mapping(&[0x399, 0x308, 0x301])?;
  assert_eq!(w >> 63, 1);
  assert_eq!(unpack_mapping(w), ([0x399, 0x308, 0x301], 3));

  let w = pack_mapping(&[0x10FFFF, 0x1F_FFFF, 0])?;
  assert_eq!(unpack_mapping(w), ([0x10FFFF, 0x1F_FFFF, 0], 3));
  OK
}

#[test]
fn test_mapping_bad() -> Void {
  assert_eq!(pack_mapping(&[1]).unwrap_err(), Error::MappingLen(1));
  assert_eq!(pack_mapping(&[1, 2, 3, 4]).unwrap_err(), Error::MappingLen(4));
  assert_eq!(
    pack_mapping(&[1, 0x20_0000]).unwrap_err(),
    Error::CodePointOverflow(0x20_0000)
  );
  OK
}
