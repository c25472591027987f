pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves `index` by `step` rows, clamped to `0..len`
pub const fn step_index(index: usize, len: usize, step: isize) -> usize {
    if len == 0 {
        return 0;
    }

    let moved = index.saturating_add_signed(step);
    if moved >= len {
        len - 1
    } else {
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap_increment(3, 4), 0);
        assert_eq!(wrap_decrement(0, 4), 3);
        assert_eq!(wrap_increment(0, 0), 0);
    }

    #[test]
    fn test_step_index_clamps() {
        assert_eq!(step_index(0, 10, -1), 0);
        assert_eq!(step_index(8, 10, 5), 9);
        assert_eq!(step_index(5, 10, -3), 2);
        assert_eq!(step_index(3, 0, 1), 0);
    }
}
