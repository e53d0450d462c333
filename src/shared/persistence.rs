use sea_orm::DbErr;

// Postgres SQLSTATE codes surface only inside the driver's error text.

pub fn is_unique_violation(err: &DbErr) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("23503") || msg.contains("foreign key constraint")
}
