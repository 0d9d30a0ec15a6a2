use std::convert::{From, TryFrom};

#[derive(Debug, PartialEq, Clone)]
pub enum Cfg_Value {
    Nil,
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
}

macro_rules! impl_cfg_value {
    ($type: ty => $val: ident) => {
        impl From<$type> for Cfg_Value {
            fn from(v: $type) -> Cfg_Value {
                Cfg_Value::$val(v)
            }
        }

        impl TryFrom<Cfg_Value> for $type {
            type Error = ();

            fn try_from(v: Cfg_Value) -> Result<Self, Self::Error> {
                if let Cfg_Value::$val(b) = v {
                    Ok(b)
                } else {
                    Err(())
                }
            }
        }
    };
}

impl_cfg_value!(bool => Bool);
impl_cfg_value!(i32 => Int);
impl_cfg_value!(f32 => Float);
impl_cfg_value!(String => String);

impl Cfg_Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Cfg_Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }
}
