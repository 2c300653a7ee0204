mod answer;
mod course;
mod de;
mod question;
mod test;

pub use answer::{Answer, AttemptId};
pub use course::Course;
pub use question::Question;
pub use test::Test;
