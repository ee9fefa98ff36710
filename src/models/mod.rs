//! 业务数据模型
//!
//! 与 `entity` 中的数据库实体分离，存储层返回的都是这里的类型。

/// 定义以字符串形式存储的枚举
///
/// 自动生成：
/// - enum 定义（第一个变体为默认值）
/// - as_str() 方法 - 返回存储用的字符串
/// - Display / FromStr 实现
macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $first:ident => $first_str:literal
            $(, $variant:ident => $str:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $first,
            $($variant,)*
        }

        impl $name {
            /// 获取存储用的字符串
            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$first => $first_str,
                    $($name::$variant => $str,)*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$first
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $first_str => Ok($name::$first),
                    $($str => Ok($name::$variant),)*
                    _ => Err(format!("Invalid {}: {s}", stringify!($name))),
                }
            }
        }
    };
}

pub mod attendance;
pub mod classes;
pub mod faculty_class_subjects;
pub mod live_classes;
pub mod marks;
pub mod notes;
pub mod notifications;
pub mod quizzes;
pub mod resources;
pub mod tasks;
pub mod users;

#[cfg(test)]
mod tests {
    use super::attendance::entities::AttendanceStatus;
    use super::users::entities::UserRole;

    #[test]
    fn test_string_enum_parse_and_display() {
        assert_eq!("faculty".parse::<UserRole>(), Ok(UserRole::Faculty));
        assert_eq!(AttendanceStatus::Excused.to_string(), "excused");
        assert_eq!(AttendanceStatus::default(), AttendanceStatus::Present);
    }

    #[test]
    fn test_string_enum_serializes_as_stored_value() {
        let json = serde_json::to_string(&AttendanceStatus::Late).unwrap();
        assert_eq!(json, "\"late\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_string_enum_rejects_unknown_value() {
        let err = "principal".parse::<UserRole>().unwrap_err();
        assert!(err.contains("UserRole"));
    }
}
