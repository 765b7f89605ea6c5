/// Name entry before the agenda. The name only gates entry; it is not kept.
#[derive(Debug, Default)]
pub struct OnboardingScreen {
    pub name: String,
}

impl OnboardingScreen {
    pub fn can_enter(&self) -> bool {
        !self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_needs_a_name() {
        let mut screen = OnboardingScreen::default();
        assert!(!screen.can_enter());
        screen.name.push('K');
        assert!(screen.can_enter());
    }
}
