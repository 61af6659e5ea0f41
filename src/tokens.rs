//! Canonical tokens for the enum-like configuration fields.
//!
//! The model stores these fields as raw strings so that a token the current
//! schema doesn't know is preserved through a load/save round-trip. An
//! editing surface, on the other hand, needs a fixed choice set: each type
//! here pairs a canonical `token()` with a tolerant `parse()` that maps any
//! unrecognized input to the default variant, and an `ALL` listing for
//! populating the choice control. Display labels are the surface's business;
//! nothing in this module depends on them.

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration (choice-list) order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The canonical document token for this variant.
            pub fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            /// Parse a document token. Unrecognized tokens fall back to the
            /// default variant rather than failing.
            pub fn parse(token: &str) -> Self {
                match token {
                    $($token => $name::$variant,)+
                    _ => $name::default(),
                }
            }
        }
    };
}

token_enum! {
    /// What the build produces.
    OutputType {
        #[default]
        Exe => "exe",
        Dll => "dll",
        Lib => "lib",
        Sys => "sys",
    }
}

token_enum! {
    /// Target processor architecture.
    Architecture {
        #[default]
        X64 => "x64",
        X86 => "x86",
        Arm64 => "arm64",
    }
}

token_enum! {
    /// C runtime library linkage (/MD vs /MT).
    RuntimeLinkage {
        #[default]
        Dynamic => "dynamic",
        Static => "static",
    }
}

token_enum! {
    /// Floating-point model (/fp:...).
    FloatingPointMode {
        #[default]
        Precise => "precise",
        Fast => "fast",
        Strict => "strict",
    }
}

token_enum! {
    /// Default calling convention (/Gd, /Gz, /Gr, /Gv).
    CallingConvention {
        #[default]
        Cdecl => "cdecl",
        Stdcall => "stdcall",
        Fastcall => "fastcall",
        Vectorcall => "vectorcall",
    }
}

token_enum! {
    /// Character set macros (UNICODE / MBCS / neither).
    CharacterSet {
        #[default]
        Unicode => "unicode",
        Mbcs => "mbcs",
        NotSet => "none",
    }
}

token_enum! {
    /// Linker subsystem (/SUBSYSTEM:...).
    Subsystem {
        #[default]
        Console => "console",
        Windows => "windows",
        Native => "native",
        EfiApplication => "efi_application",
        BootApplication => "boot_application",
        Posix => "posix",
    }
}

token_enum! {
    /// Kernel driver framework.
    DriverType {
        #[default]
        Wdm => "wdm",
        Kmdf => "kmdf",
        Wdf => "wdf",
    }
}

token_enum! {
    /// Minimum Windows version a driver targets.
    DriverTargetOs {
        Win7 => "win7",
        Win8 => "win8",
        Win81 => "win81",
        #[default]
        Win10 => "win10",
        Win11 => "win11",
    }
}
