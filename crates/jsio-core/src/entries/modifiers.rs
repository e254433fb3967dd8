use bitflags::bitflags;

bitflags! {
    /// Declaration modifiers of a class or member.
    ///
    /// ```rust
    /// use jsio_core::Modifiers;
    ///
    /// let m = Modifiers::STATIC | Modifiers::FINAL;
    /// assert!(m.contains(Modifiers::STATIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Belongs to the type rather than an instance.
        const STATIC = 1 << 0;
        /// Cannot be reassigned or overridden.
        const FINAL = 1 << 1;
        /// Has no implementation.
        const ABSTRACT = 1 << 2;
    }
}

impl Modifiers {
    #[inline]
    pub fn is_static(self) -> bool {
        self.contains(Modifiers::STATIC)
    }

    #[inline]
    pub fn is_final(self) -> bool {
        self.contains(Modifiers::FINAL)
    }

    #[inline]
    pub fn is_abstract(self) -> bool {
        self.contains(Modifiers::ABSTRACT)
    }
}
