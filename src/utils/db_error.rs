/// Returns true when the error is a foreign-key violation on the comments →
/// restaurants reference, i.e. the target restaurant does not exist.
pub fn is_restaurant_fk_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_foreign_key_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("comments_restaurant_id_fkey"))
}
