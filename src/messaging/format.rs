//! Text rendering for outbound messages (Telegram HTML subset).

use crate::analytics::MasterySummary;
use crate::curriculum::plan::DailyPlan;
use crate::dispatch::LessonContent;
use crate::progress::{ProgressSnapshot, PROGRAM_DAYS};
use crate::review::quiz::{Quiz, QuizQuestion};
use crate::review::VocabularyItem;

/// Escape the characters Telegram HTML treats specially.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn render_plan(plan: &DailyPlan) -> String {
    let mut out = format!(
        "<b>Week {} · Day {}: {}</b>\n<i>{}</i>\n\n{}\n",
        plan.week,
        plan.day,
        escape(&plan.theme),
        plan.focus.label(),
        escape(&plan.task),
    );
    out.push_str("\n<b>Today</b>\n");
    for activity in &plan.sub_activities {
        out.push_str(&format!("• {}\n", escape(activity)));
    }
    out.push_str("\n<b>Exercises</b>\n");
    for (i, exercise) in plan.exercises.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, escape(&exercise.description)));
    }
    out.push_str(&format!("\n⏱ About {} minutes", plan.estimated_minutes));
    out
}

pub fn render_word(item: &VocabularyItem) -> String {
    let mut line = format!("<b>{}</b> - {}", escape(&item.target_term), escape(&item.source_term));
    if !item.pronunciation.is_empty() {
        line.push_str(&format!(" [{}]", escape(&item.pronunciation)));
    }
    if !item.example.is_empty() {
        line.push_str(&format!("\n   <i>{}</i>", escape(&item.example)));
    }
    line
}

pub fn render_lesson(lesson: &LessonContent) -> String {
    let mut out = render_plan(&lesson.plan);

    if !lesson.new_words.is_empty() {
        out.push_str(&format!("\n\n<b>New words ({})</b>\n", lesson.new_words.len()));
        for item in &lesson.new_words {
            out.push_str(&render_word(item));
            out.push('\n');
        }
    }
    if let Some(story) = &lesson.story {
        out.push_str(&format!(
            "\n<b>📖 {}</b>\n{}\n",
            escape(&story.title),
            escape(&story.text)
        ));
    }
    if let Some(first) = lesson.quiz.as_ref().and_then(|q| q.questions.first()) {
        let total = lesson.quiz.as_ref().map_or(0, |q| q.len());
        out.push_str(&format!(
            "\n<b>📝 Weekly quiz</b>: {} questions. Answer each one in a message, or /skip to stop.\n\n{}\n",
            total,
            render_question(first, 0, total)
        ));
    }
    out
}

pub fn render_progress(progress: &ProgressSnapshot, summary: &MasterySummary) -> String {
    let mut out = if progress.completed {
        format!("<b>Program completed</b> 🎉 ({} days)\n", PROGRAM_DAYS)
    } else {
        format!(
            "<b>Week {} · Day {}</b>\nProgram day {} of {}\n",
            progress.week_number, progress.day_number, progress.total_elapsed_days, PROGRAM_DAYS
        )
    };
    out.push_str(&render_mastery(summary));
    out
}

pub fn render_mastery(summary: &MasterySummary) -> String {
    if summary.total_words == 0 {
        return "No words learned yet.".to_string();
    }
    let levels: Vec<String> = summary
        .per_level
        .iter()
        .enumerate()
        .map(|(i, n)| format!("L{}: {}", i + 1, n))
        .collect();
    format!(
        "Words: {} · mastered: {} · average level {:.1}\n{}",
        summary.total_words,
        summary.mastered,
        summary.average_level,
        levels.join(" · ")
    )
}

pub fn render_due_reminder(due: &[VocabularyItem]) -> String {
    let preview: Vec<String> = due.iter().take(5).map(|i| escape(&i.target_term)).collect();
    let more = if due.len() > preview.len() {
        format!(" and {} more", due.len() - preview.len())
    } else {
        String::new()
    };
    format!(
        "🔁 <b>{} words are due for review</b>: {}{}\nSend /review to practise them now.",
        due.len(),
        preview.join(", "),
        more
    )
}

pub fn render_question(question: &QuizQuestion, index: usize, total: usize) -> String {
    format!("<b>Question {}/{}</b>\n{}", index + 1, total, escape(&question.prompt))
}

pub fn render_quiz_intro(quiz: &Quiz) -> String {
    format!(
        "Review time: {} questions. Answer each one in a message, or /skip to stop.",
        quiz.len()
    )
}

pub fn render_answer_feedback(correct: bool, expected: &str) -> String {
    if correct {
        "✅ Correct!".to_string()
    } else {
        format!("❌ The answer was <b>{}</b>.", escape(expected))
    }
}

pub fn render_quiz_result(correct: usize, total: usize) -> String {
    format!("Review finished: {}/{} correct.", correct, total)
}

pub fn render_practice_prompt(theme: &str, prompt: &str) -> String {
    format!("✍️ <b>Writing practice: {}</b>\n{}", escape(theme), escape(prompt))
}

pub fn render_weekly_summary(week: u32, theme: &str, summary: &MasterySummary, due: usize) -> String {
    format!(
        "📊 <b>Week {} summary: {}</b>\n{}\nWords due for review: {}",
        week,
        escape(theme),
        render_mastery(summary),
        due
    )
}

pub fn render_completion() -> String {
    "🎓 You have finished all 12 weeks! Your words stay available with /review.".to_string()
}

pub fn render_welcome(name: Option<&str>) -> String {
    let greeting = match name {
        Some(name) => format!("Welcome, {}!", escape(name)),
        None => "Welcome!".to_string(),
    };
    format!(
        "{} Your 12-week course starts today. A new lesson arrives every morning at 08:00 UTC.\n\n{}",
        greeting,
        render_help()
    )
}

pub fn render_not_enrolled() -> String {
    "You are not enrolled yet. Send /start to begin your course.".to_string()
}

pub fn render_help() -> String {
    [
        "/today - today's plan",
        "/review - practise words that are due",
        "/progress - where you are in the course",
        "/skip - stop the current review",
        "/help - this list",
    ]
    .join("\n")
}
