use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

/// Demo members: name, email, age.
const DEMO_MEMBERS: &[(&str, &str, i32)] = &[
    ("Alice Carter", "alice@example.com", 30),
    ("Ben Okafor", "ben@example.com", 45),
    ("Chloe Martin", "chloe@example.com", 27),
];

/// Demo sessions: member email, date, duration in minutes, type.
const DEMO_SESSIONS: &[(&str, (i32, u32, u32), i32, &str)] = &[
    ("alice@example.com", (2024, 1, 1), 45, "cardio"),
    ("alice@example.com", (2024, 1, 3), 60, "strength"),
    ("ben@example.com", (2024, 1, 2), 30, "yoga"),
];

pub struct DatabaseSeeder {
    pool: PgPool,
}

impl DatabaseSeeder {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn seed_all(&self) -> Result<()> {
        tracing::info!("Starting database seeding...");

        let members = self.seed_members().await?;
        if members == 0 {
            tracing::info!("Demo members already present, skipping workout sessions");
            return Ok(());
        }
        self.seed_workout_sessions().await?;

        tracing::info!("Database seeding completed!");
        Ok(())
    }

    async fn seed_members(&self) -> Result<u64> {
        let mut inserted = 0;

        for (name, email, age) in DEMO_MEMBERS {
            let result = sqlx::query(
                "INSERT INTO members (name, email, age) VALUES ($1, $2, $3) ON CONFLICT (email) DO NOTHING",
            )
            .bind(*name)
            .bind(*email)
            .bind(*age)
            .execute(&self.pool)
            .await?;

            inserted += result.rows_affected();
        }

        tracing::info!("Seeded {} members", inserted);
        Ok(inserted)
    }

    async fn seed_workout_sessions(&self) -> Result<()> {
        for (email, (year, month, day), duration, session_type) in DEMO_SESSIONS {
            let date = NaiveDate::from_ymd_opt(*year, *month, *day)
                .ok_or_else(|| anyhow::anyhow!("invalid demo date {year}-{month}-{day}"))?;

            sqlx::query(
                r#"
                INSERT INTO workout_sessions (member_id, date, duration, session_type)
                SELECT id, $2, $3, $4 FROM members WHERE email = $1
                "#,
            )
            .bind(*email)
            .bind(date)
            .bind(*duration)
            .bind(*session_type)
            .execute(&self.pool)
            .await?;
        }

        tracing::info!("Seeded {} workout sessions", DEMO_SESSIONS.len());
        Ok(())
    }
}
