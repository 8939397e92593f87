use sqlx::SqlitePool;

/// In-memory SQLite database with migrations applied.
pub async fn set_up_in_memory_db() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}


/// Canned search result markup for the board adapters.
#[cfg(test)]
pub mod mocks {
    /// A jobs.nhs.uk result card.
    pub fn nhse_card(href: &str, title: &str, location: Option<&str>, date: Option<&str>) -> String {
        let location = location
            .map(|l| format!(r#"<div data-test="search-result-location"><h3>{}</h3></div>"#, l))
            .unwrap_or_default();
        let date = date
            .map(|d| {
                format!(
                    r#"<ul><li data-test="search-result-publicationDate">Date posted: <strong>{}</strong></li></ul>"#,
                    d
                )
            })
            .unwrap_or_default();
        format!(
            r#"<li data-test="search-result">
                 <h2><a data-test="search-result-job-title" href="{}">{}</a></h2>
                 {}
                 {}
               </li>"#,
            href, title, location, date
        )
    }

    pub fn nhse_results_page(cards: &[String]) -> String {
        format!(
            r#"<html><body><main><ul class="search-results">{}</ul></main></body></html>"#,
            cards.join("\n")
        )
    }

    /// A HealthJobsUK-platform result card (healthjobsuk.com, nhsjobs.com).
    pub fn hj_card(
        href: &str,
        title: &str,
        location: Option<&str>,
        pay: Option<&str>,
        date: Option<&str>,
    ) -> String {
        let field = |class: &str, value: Option<&str>| {
            value
                .map(|v| format!(r#"<div class="{}">{}</div>"#, class, v))
                .unwrap_or_default()
        };
        format!(
            r#"<a class="clearfix" href="{}">
                 <div class="hj-jobtitle hj-job-detail">{}</div>
                 {}
                 {}
                 {}
               </a>"#,
            href,
            title,
            field("hj-locationtown hj-job-detail", location),
            field("hj-salary hj-job-detail", pay),
            field("hj-job-date", date),
        )
    }

    pub fn hj_results_page(cards: &[String]) -> String {
        format!(
            r#"<html><body><div id="hj-job-list">{}</div></body></html>"#,
            cards.join("\n")
        )
    }
}
