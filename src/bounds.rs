/// Length of the left group when a strip is split into two halves.
///
/// Odd lengths give the extra LED to the left group.
pub const fn center_of<T>(leds: &[T]) -> usize {
    let count = leds.len();
    let mut center_len = count / 2;
    if !count.is_multiple_of(2) {
        center_len += 1;
    }

    if center_len <= count {
        return center_len;
    }
    count
}
