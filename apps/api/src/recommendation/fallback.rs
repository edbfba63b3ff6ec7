use crate::models::brief::ProjectBrief;

const FALLBACK_BODY: &str = "\
Top recommendations:
1) Data model & storage
   - Start with PostgreSQL (or MySQL if required)
   - Use SQLAlchemy/Prisma to avoid vendor lock-in
2) Backend
   - Python FastAPI (lightweight) or Node/Express
   - Add JWT auth + role-based access
3) ETL / Analytics
   - Ingest CSV/API feeds; schedule jobs with cron
   - Basic KPIs: daily volume, error rate, time-to-insight
4) Frontend
   - Your current React + Tailwind shell is perfect
5) Next steps (2 weeks)
   - Day 1–2: schema + API skeleton
   - Day 3–5: CRUD + auth
   - Week 2: dashboards + tests";

/// Canned recommendation used whenever upstream text is unavailable.
/// Depends only on the brief's name and goal; never empty.
pub fn fallback_recommendation(brief: &ProjectBrief) -> String {
    format!(
        "Project: {}\nGoal: {}\n\n{FALLBACK_BODY}",
        brief.display_name(),
        brief.display_goal()
    )
}
