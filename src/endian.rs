// src/endian.rs
//! Host byte-order detection.
//!
//! The host byte order is resolved once, at build time, from the target
//! architecture description. There is no runtime probe and no fallback: a
//! target whose byte order is neither big- nor little-endian fails to
//! compile.

#[cfg(not(any(target_endian = "big", target_endian = "little")))]
compile_error!("target byte order must be big- or little-endian");

/// Byte order of a multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most-significant byte first.
    Big,
    /// Least-significant byte first.
    Little,
}

impl Endian {
    /// The native byte order of the target platform.
    ///
    /// Fixed at build time; never recomputed.
    pub const fn host() -> Self {
        #[cfg(target_endian = "big")]
        let endian = Endian::Big;

        #[cfg(target_endian = "little")]
        let endian = Endian::Little;

        endian
    }

    /// The reverse of this byte order.
    pub const fn opposite(self) -> Self {
        match self {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }

    pub const fn is_big(self) -> bool {
        matches!(self, Endian::Big)
    }

    pub const fn is_little(self) -> bool {
        matches!(self, Endian::Little)
    }
}

/// Native byte order of the host, fixed at build time.
pub const HOST_ENDIAN: Endian = Endian::host();

/// True when the host stores multi-byte values most-significant byte first.
///
/// Exactly one of this and [`is_host_little_endian`] is true. Callers use
/// the pair to decide whether a value read from or written to a foreign
/// byte order needs [`swapped`](crate::swapped) applied.
pub const fn is_host_big_endian() -> bool {
    HOST_ENDIAN.is_big()
}

/// True when the host stores multi-byte values least-significant byte first.
pub const fn is_host_little_endian() -> bool {
    HOST_ENDIAN.is_little()
}
