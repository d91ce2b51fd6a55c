use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Studios must exist before pieces reference them
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS studios (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            phone TEXT NOT NULL UNIQUE
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS pieces (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            date TEXT NOT NULL,
            author TEXT NOT NULL,
            genre TEXT NOT NULL,
            nationality TEXT NOT NULL,
            studio INTEGER,
            summary TEXT,
            FOREIGN KEY (studio) REFERENCES studios(id)
        )
        "#
        .to_owned(),
    ))
    .await?;

    // No ON DELETE CASCADE: piece deletion removes evaluations explicitly
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS evaluations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            piece INTEGER NOT NULL,
            note INTEGER NOT NULL,
            date TEXT NOT NULL,
            text TEXT NOT NULL,
            FOREIGN KEY (piece) REFERENCES pieces(id)
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_evaluations_piece_date ON evaluations (piece, date)"
            .to_owned(),
    ))
    .await?;

    Ok(())
}
