//! Declarative option tables behind the [`Figure`](super::Figure) setter surface.
//!
//! Every setter is one row `name [| alias]: kind => "key";`. The kind picks the parameter type,
//! the key is the attribute path written into the target map. Axis rows name the x and y methods
//! together and generate both.

/// Which of a figure's option maps a setter writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionTarget {
    Layout,
    XAxis,
    YAxis,
}

/// One row of the setter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    /// Public method name (aliases have their own entry with the same key).
    pub name: &'static str,
    pub target: OptionTarget,
    /// Attribute key in underscore path form, e.g. `title_font_size`.
    pub key: &'static str,
}

macro_rules! option_setter {
    ($(#[$doc:meta])* $map:ident, $name:ident, text, $key:literal) => {
        $(#[$doc])*
        pub fn $name(&mut self, value: impl Into<String>) -> &mut Self {
            self.$map
                .insert($key.to_string(), ::serde_json::Value::String(value.into()));
            self
        }
    };
    ($(#[$doc:meta])* $map:ident, $name:ident, int, $key:literal) => {
        $(#[$doc])*
        pub fn $name(&mut self, value: i64) -> &mut Self {
            self.$map.insert($key.to_string(), ::serde_json::Value::from(value));
            self
        }
    };
    ($(#[$doc:meta])* $map:ident, $name:ident, real, $key:literal) => {
        $(#[$doc])*
        pub fn $name(&mut self, value: f64) -> &mut Self {
            self.$map.insert($key.to_string(), ::serde_json::Value::from(value));
            self
        }
    };
    ($(#[$doc:meta])* $map:ident, $name:ident, flag, $key:literal) => {
        $(#[$doc])*
        pub fn $name(&mut self, value: bool) -> &mut Self {
            self.$map.insert($key.to_string(), ::serde_json::Value::Bool(value));
            self
        }
    };
    ($(#[$doc:meta])* $map:ident, $name:ident, list, $key:literal) => {
        $(#[$doc])*
        pub fn $name<I>(&mut self, value: I) -> &mut Self
        where
            I: IntoIterator,
            I::Item: Into<::serde_json::Value>,
        {
            let list = value.into_iter().map(Into::into).collect();
            self.$map
                .insert($key.to_string(), ::serde_json::Value::Array(list));
            self
        }
    };
    ($(#[$doc:meta])* $map:ident, $name:ident, specs, $key:literal) => {
        $(#[$doc])*
        pub fn $name(&mut self, value: impl Into<$crate::options::Options>) -> &mut Self {
            self.$map
                .insert($key.to_string(), ::serde_json::Value::Object(value.into()));
            self
        }
    };
    ($(#[$doc:meta])* $map:ident, $name:ident, any, $key:literal) => {
        $(#[$doc])*
        pub fn $name(&mut self, value: impl Into<::serde_json::Value>) -> &mut Self {
            self.$map.insert($key.to_string(), value.into());
            self
        }
    };
}

macro_rules! figure_options {
    (
        layout {
            $(
                $(#[$ldoc:meta])*
                $lname:ident $(| $lalias:ident)* : $lkind:tt => $lkey:literal;
            )*
        }
        axes {
            $(
                $(#[$adoc:meta])*
                [$xname:ident, $yname:ident] $(| [$xalias:ident, $yalias:ident])* : $akind:tt => $akey:literal;
            )*
        }
    ) => {
        impl $crate::figure::Figure {
            /// Every generated setter, in table order, x axis rows before their y twins.
            pub const OPTIONS: &'static [$crate::figure::OptionEntry] = &[
                $(
                    $crate::figure::OptionEntry {
                        name: stringify!($lname),
                        target: $crate::figure::OptionTarget::Layout,
                        key: $lkey,
                    },
                    $(
                        $crate::figure::OptionEntry {
                            name: stringify!($lalias),
                            target: $crate::figure::OptionTarget::Layout,
                            key: $lkey,
                        },
                    )*
                )*
                $(
                    $crate::figure::OptionEntry {
                        name: stringify!($xname),
                        target: $crate::figure::OptionTarget::XAxis,
                        key: $akey,
                    },
                    $crate::figure::OptionEntry {
                        name: stringify!($yname),
                        target: $crate::figure::OptionTarget::YAxis,
                        key: $akey,
                    },
                    $(
                        $crate::figure::OptionEntry {
                            name: stringify!($xalias),
                            target: $crate::figure::OptionTarget::XAxis,
                            key: $akey,
                        },
                        $crate::figure::OptionEntry {
                            name: stringify!($yalias),
                            target: $crate::figure::OptionTarget::YAxis,
                            key: $akey,
                        },
                    )*
                )*
            ];

            $(
                option_setter! { $(#[$ldoc])* layout, $lname, $lkind, $lkey }
                $(
                    option_setter! {
                        #[doc = concat!("Alias of [`Figure::", stringify!($lname), "`].")]
                        layout, $lalias, $lkind, $lkey
                    }
                )*
            )*

            $(
                option_setter! { $(#[$adoc])* xaxis, $xname, $akind, $akey }
                option_setter! { $(#[$adoc])* yaxis, $yname, $akind, $akey }
                $(
                    option_setter! {
                        #[doc = concat!("Alias of [`Figure::", stringify!($xname), "`].")]
                        xaxis, $xalias, $akind, $akey
                    }
                    option_setter! {
                        #[doc = concat!("Alias of [`Figure::", stringify!($yname), "`].")]
                        yaxis, $yalias, $akind, $akey
                    }
                )*
            )*
        }
    };
}
