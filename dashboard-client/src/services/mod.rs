pub mod attendance;
pub mod classes;
pub mod homework;
pub mod lessons;
pub mod schedules;
pub mod users;

pub use attendance::AttendanceService;
pub use classes::ClassService;
pub use homework::HomeworkService;
pub use lessons::LessonService;
pub use schedules::ScheduleService;
pub use users::UserService;
