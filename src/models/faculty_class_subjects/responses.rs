use serde::{Deserialize, Serialize};

use super::entities::FacultyClassSubject;
use crate::models::classes::entities::Class;

/// 分配记录及所属班级
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyClassSubjectDetail {
    pub assignment: FacultyClassSubject,
    pub class: Class,
}
