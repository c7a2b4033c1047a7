use sqlx::PgPool;

pub type Db = PgPool;
