pub mod deadline_service;
pub mod posting_service;
pub mod recommendation_service;
pub mod student_service;
