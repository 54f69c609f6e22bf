//! Attendant account management.

use std::io::Write;

use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};

use sales_tracker_core::models::validate_commission;
use sales_tracker_core::{Dataset, Email, StoreError, User, UserId};

use crate::auth::{hash_password, validate_password};
use crate::error::CliError;
use crate::file_store::FileStore;

/// Create a new attendant account.
///
/// # Errors
///
/// Returns an error if the email is invalid or taken, the password is too
/// weak, or the commission is outside 0-100.
pub async fn create(
    store: &FileStore,
    name: &str,
    email: &str,
    password: &SecretString,
    commission: Decimal,
    out: &mut impl Write,
) -> Result<UserId, CliError> {
    let email = Email::parse(email)?;
    validate_password(password)?;

    let mut data = store.load().await?;
    // Checked before hashing so a taken email fails fast.
    if data.find_user_by_email(&email).is_some() {
        return Err(StoreError::DuplicateEmail(email).into());
    }

    let password_hash = hash_password(password.expose_secret())?;
    let user = User::new_attendant(name, email, password_hash, commission)?;
    let id = user.id.clone();
    data.add_user(user)?;
    store.save(&data).await?;

    tracing::info!(user_id = %id, "Attendant created");
    writeln!(out, "Attendant {id} created")?;
    Ok(id)
}

/// Delete an attendant account. Their sales are kept.
///
/// # Errors
///
/// Returns an error if the account does not exist or is not an attendant.
pub async fn delete(store: &FileStore, id: &UserId, out: &mut impl Write) -> Result<(), CliError> {
    let mut data = store.load().await?;
    require_attendant(&data, id)?;

    let removed = data.delete_user(id)?;
    store.save(&data).await?;

    tracing::info!(user_id = %id, "Attendant deleted");
    writeln!(out, "Attendant {} ({id}) deleted", removed.name)?;
    Ok(())
}

/// Set an attendant's commission percentage.
///
/// # Errors
///
/// Returns an error if `pct` is outside 0-100 or the account is not an attendant.
pub async fn set_commission(
    store: &FileStore,
    id: &UserId,
    pct: Decimal,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let pct = validate_commission(pct)?;

    let mut data = store.load().await?;
    require_attendant(&data, id)?;
    data.update_commission(id, pct)?;
    store.save(&data).await?;

    tracing::info!(user_id = %id, commission = %pct, "Commission updated");
    writeln!(out, "Commission for {id} set to {}%", pct.normalize())?;
    Ok(())
}

/// List attendant accounts.
///
/// # Errors
///
/// Returns an error if the data file cannot be read or the output cannot be written.
pub async fn list(store: &FileStore, out: &mut impl Write) -> Result<(), CliError> {
    let data = store.load().await?;

    let mut any = false;
    for user in data.attendants() {
        any = true;
        writeln!(
            out,
            "{:<38} {:<24} {:<28} {}%",
            user.id,
            user.name,
            user.email,
            user.commission_rate().normalize()
        )?;
    }
    if !any {
        writeln!(out, "No attendants")?;
    }
    Ok(())
}

fn require_attendant(data: &Dataset, id: &UserId) -> Result<(), CliError> {
    match data.user(id) {
        Some(user) if user.is_attendant() => Ok(()),
        Some(_) => Err(CliError::NotAnAttendant(id.clone())),
        None => Err(StoreError::NotFound {
            kind: "user",
            id: id.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sales_tracker_core::ValidationError;

    use super::*;
    use crate::auth::verify_password;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    async fn demo_store(dir: &tempfile::TempDir) -> FileStore {
        let data = Dataset::demo_roster(
            |pw| Ok::<_, std::convert::Infallible>(format!("hashed:{pw}")),
            "pw",
        )
        .unwrap();
        let store = FileStore::new(dir.path().join("data.json"));
        store.save(&data).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let dir = tempfile::tempdir().unwrap();
        let store = demo_store(&dir).await;

        let id = create(
            &store,
            "Ana Costa",
            "Ana@Empresa.com",
            &secret("senha-forte"),
            Decimal::new(6, 0),
            &mut Vec::new(),
        )
        .await
        .unwrap();

        let data = store.load().await.unwrap();
        let ana = data.user(&id).unwrap();
        assert_eq!(ana.email.as_str(), "ana@empresa.com");
        assert_ne!(ana.password_hash, "senha-forte");
        assert!(verify_password(&secret("senha-forte"), &ana.password_hash).is_ok());
        assert_eq!(data.attendants().count(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let store = demo_store(&dir).await;
        let pw = secret("senha-forte");

        let err = create(&store, "X", "joao@empresa.com", &pw, Decimal::ONE, &mut Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Store(StoreError::DuplicateEmail(_))));

        let err = create(&store, "X", "x@empresa.com", &secret("123"), Decimal::ONE, &mut Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Auth(_)));

        let err = create(&store, "X", "x@empresa.com", &pw, Decimal::new(101, 0), &mut Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Validation(ValidationError::CommissionOutOfRange(_))
        ));

        assert_eq!(store.load().await.unwrap().users.len(), 3);
    }

    #[tokio::test]
    async fn test_set_commission_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let store = demo_store(&dir).await;
        let joao = UserId::new("1");

        set_commission(&store, &joao, Decimal::new(100, 0), &mut Vec::new())
            .await
            .unwrap();
        let data = store.load().await.unwrap();
        assert_eq!(data.user(&joao).unwrap().commission_rate(), Decimal::ONE_HUNDRED);

        for bad in [Decimal::new(-1, 0), Decimal::new(1001, 1)] {
            let err = set_commission(&store, &joao, bad, &mut Vec::new())
                .await
                .unwrap_err();
            assert!(matches!(err, CliError::Validation(_)));
        }

        let err = set_commission(&store, &UserId::new("admin"), Decimal::ONE, &mut Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::NotAnAttendant(_)));
    }

    #[tokio::test]
    async fn test_delete_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = demo_store(&dir).await;

        delete(&store, &UserId::new("1"), &mut Vec::new())
            .await
            .unwrap();
        let err = delete(&store, &UserId::new("admin"), &mut Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::NotAnAttendant(_)));

        let mut out = Vec::new();
        list(&store, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Maria Santos"));
        assert!(!text.contains("João Silva"));
        assert!(!text.contains("Administrador"));
    }
}
