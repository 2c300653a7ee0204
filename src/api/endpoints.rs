//! One method per server route. All return the raw response text unless the
//! route has a typed body the quiz flow depends on.

use crate::error::Result;
use crate::models::{Answer, AttemptId};
use crate::protocol::{
    CreateCourse, CreateQuestion, CreateTest, LegacyAnswer, LegacyVerdict, ReorderQuestions,
    TestAnswerSubmission, UpdateQuestion,
};

use super::client::{ApiClient, HEALTH_PATH};

impl ApiClient {
    pub async fn health(&self) -> Result<String> {
        self.get(HEALTH_PATH, &[]).await
    }

    pub async fn list_courses(&self) -> Result<String> {
        self.get("/courses", &[]).await
    }

    pub async fn course_questions(&self, course_id: i64) -> Result<String> {
        self.get(&format!("/course/{}/questions", course_id), &[])
            .await
    }

    pub async fn course_tests(&self, course_id: i64) -> Result<String> {
        self.get("/course/tests", &[("course_id", course_id.to_string())])
            .await
    }

    // --- quiz attempt ---

    pub async fn start_test(&self, test_id: i64) -> Result<String> {
        self.get("/test/start", &[("test_id", test_id.to_string())])
            .await
    }

    pub async fn get_test(&self, test_id: i64) -> Result<String> {
        self.get("/test/get", &[("id", test_id.to_string())]).await
    }

    pub async fn submit_test_answer(&self, submission: &TestAnswerSubmission) -> Result<String> {
        self.post("/test/answer", submission).await
    }

    pub async fn finish_test(&self, attempt_id: &AttemptId) -> Result<String> {
        self.get("/test/finish", &[("attempt_id", attempt_id.to_string())])
            .await
    }

    /// Single-question grading used by the older answer-all-at-once flow.
    pub async fn submit_answer(&self, question_id: i64, answer: Answer) -> Result<LegacyVerdict> {
        let body = LegacyAnswer {
            question_id,
            user_answer: answer,
        };
        let text = self.post("/answer", &body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    // --- admin ---

    pub async fn block_user(&self, user_id: i64, block: bool) -> Result<String> {
        self.get(
            "/admin/user/block",
            &[("id", user_id.to_string()), ("block", block.to_string())],
        )
        .await
    }

    pub async fn update_user_name(&self, user_id: i64, name: &str) -> Result<String> {
        self.get(
            "/user/update-name",
            &[("id", user_id.to_string()), ("name", name.to_string())],
        )
        .await
    }

    // --- teacher: courses ---

    pub async fn create_course(&self, course: &CreateCourse) -> Result<String> {
        self.post("/teacher/course/create", course).await
    }

    pub async fn enroll_user(&self, course_id: i64, user_id: i64) -> Result<String> {
        self.get(
            "/teacher/course/enroll",
            &[
                ("course_id", course_id.to_string()),
                ("user_id", user_id.to_string()),
            ],
        )
        .await
    }

    pub async fn delete_course(&self, course_id: i64) -> Result<String> {
        self.get("/teacher/course/delete", &[("id", course_id.to_string())])
            .await
    }

    // --- teacher: questions ---

    pub async fn create_question(&self, question: &CreateQuestion) -> Result<String> {
        self.post("/teacher/question/create", question).await
    }

    pub async fn update_question(&self, question: &UpdateQuestion) -> Result<String> {
        self.post("/teacher/question/update", question).await
    }

    pub async fn delete_question(&self, question_id: i64) -> Result<String> {
        self.get("/teacher/question/delete", &[("id", question_id.to_string())])
            .await
    }

    pub async fn list_questions(&self) -> Result<String> {
        self.get("/teacher/question/list", &[]).await
    }

    pub async fn teacher_course_questions(&self, course_id: i64) -> Result<String> {
        self.get(
            "/teacher/course/questions",
            &[("course_id", course_id.to_string())],
        )
        .await
    }

    // --- teacher: tests ---

    pub async fn create_test(&self, test: &CreateTest) -> Result<String> {
        self.post("/teacher/test/create", test).await
    }

    pub async fn set_test_status(&self, test_id: i64, active: bool) -> Result<String> {
        self.get(
            "/teacher/test/status",
            &[("id", test_id.to_string()), ("active", active.to_string())],
        )
        .await
    }

    pub async fn reorder_test_questions(&self, reorder: &ReorderQuestions) -> Result<String> {
        self.post("/teacher/test/questions/reorder", reorder).await
    }

    pub async fn test_results(&self, test_id: i64) -> Result<String> {
        self.get("/teacher/test/results", &[("test_id", test_id.to_string())])
            .await
    }
}
