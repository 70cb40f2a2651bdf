// Steps through the variants of a small settings enum, wrapping at the end
pub trait Cycle: Sized + Copy + PartialEq + 'static {
    // Every variant, in toggle order
    fn variants() -> &'static [Self];

    // Where this value sits in `variants()`; unknown values count as the first
    fn index(&self) -> usize {
        Self::variants()
            .iter()
            .position(|&val| val == *self)
            .unwrap_or(0)
    }

    fn next(&self) -> Self {
        let all = Self::variants();
        all[(self.index() + 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::Cycle;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Light {
        Red,
        Green,
        Amber,
    }

    impl Cycle for Light {
        fn variants() -> &'static [Self] {
            &[Light::Red, Light::Green, Light::Amber]
        }
    }

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(Light::Red.next(), Light::Green);
        assert_eq!(Light::Green.next(), Light::Amber);
        assert_eq!(Light::Amber.next(), Light::Red);
    }

    #[test]
    fn index_follows_declaration_order() {
        assert_eq!(Light::Red.index(), 0);
        assert_eq!(Light::Amber.index(), 2);
    }
}
