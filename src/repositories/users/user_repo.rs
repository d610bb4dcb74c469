//! # 사용자 레코드 저장소 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 저장소입니다.
//! ID → 레코드 매핑을 메모리에 보관하며, 모든 쓰기에서 이메일 유효성을 보장합니다.
//!
//! ## 특징
//!
//! - **쓰기 시 검증**: 생성/수정 시 이메일 필수 및 형식 규칙 재검증
//! - **원자적 수정**: 검증 실패 시 기존 레코드는 그대로 유지
//! - **명시적 구성**: 전역 싱글톤 없이 [`StoreConfig`]를 생성자 인자로 받음
//! - **동시성**: 단일 `RwLock`으로 쓰기를 직렬화, 읽기는 동시 수행

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use log::debug;
use uuid::Uuid;
use crate::config::StoreConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::user::{User, UserChanges};

/// 사용자 레코드 저장소
///
/// 저장소는 각 레코드의 생명주기를 단독으로 소유합니다.
/// 레코드는 [`delete`](Self::delete) 호출 또는 저장소 해제 시에만 사라지며,
/// 외부로는 항상 복제본이 반환됩니다.
///
/// ## 에러 처리
///
/// - **ValidationError**: 이메일 누락 또는 형식 오류
/// - **NotFound**: 발급된 적 없거나 삭제된 ID
/// - **ConflictError**: 동시성 스탬프 불일치
/// - **InternalError**: 잠금 오염
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::config::StoreConfig;
/// use crate::repositories::users::user_repo::UserRecordStore;
///
/// let store = UserRecordStore::new(&StoreConfig::default());
///
/// let alice = store.create("alice", "alice@example.com")?;
/// let found = store.get(&alice.id)?;
/// store.delete(&alice.id)?;
/// ```
#[derive(Debug)]
pub struct UserRecordStore {
    records: RwLock<HashMap<Uuid, User>>,
}

impl UserRecordStore {
    /// 설정값으로 빈 저장소를 생성합니다.
    pub fn new(config: &StoreConfig) -> Self {
        debug!("사용자 저장소 생성: initial_capacity={}", config.initial_capacity);

        Self {
            records: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
        }
    }

    /// 새 사용자 생성
    ///
    /// 새 고유 ID를 발급하고 레코드를 저장합니다.
    ///
    /// ID는 UUID v4(122비트 난수)입니다. 살아 있는 ID와의 충돌은 다시 뽑아 배제하고,
    /// 삭제된 ID를 다시 뽑을 확률은 무시할 수 있는 수준이라 별도 이력을 두지 않습니다.
    ///
    /// 이메일은 앞뒤 공백을 제거한 형태로 저장됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ValidationError)` - `"Email field is required"` 또는
    ///   `"Enter a valid email address"`. 이 경우 아무것도 저장되지 않습니다.
    pub fn create(&self, username: &str, email: &str) -> AppResult<User> {
        let mut records = self.write()?;

        // 살아 있는 ID와는 절대 겹치지 않음
        let mut id = Uuid::new_v4();
        while records.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let user = User::new(id, username, email)?;
        records.insert(id, user.clone());

        debug!("사용자 레코드 저장: id={}", id);
        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없는 경우
    pub fn get(&self, id: &Uuid) -> AppResult<User> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// 사용자 정보 부분 수정
    ///
    /// `changes.email`이 있으면 적용 전에 다시 검증합니다.
    /// `changes.concurrency_stamp`가 있으면 현재 스탬프와 비교하여 다르면
    /// `ConflictError`를 반환합니다.
    ///
    /// 검사와 적용은 하나의 쓰기 잠금 안에서 수행되며,
    /// 어떤 단계에서 실패하든 기존 레코드는 변경되지 않습니다.
    pub fn update(&self, id: &Uuid, changes: &UserChanges) -> AppResult<User> {
        let mut records = self.write()?;
        let current = records.get_mut(id).ok_or_else(|| not_found(id))?;

        if let Some(expected) = &changes.concurrency_stamp {
            if *expected != current.concurrency_stamp {
                return Err(AppError::ConflictError(
                    "다른 요청이 먼저 사용자 정보를 수정했습니다".to_string(),
                ));
            }
        }

        let updated = current.with_changes(changes)?;
        *current = updated.clone();

        debug!("사용자 레코드 수정: id={}", id);
        Ok(updated)
    }

    /// 사용자 삭제
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없는 경우
    pub fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.write()?
            .remove(id)
            .map(|_| debug!("사용자 레코드 삭제: id={}", id))
            .ok_or_else(|| not_found(id))
    }

    /// 모든 사용자 조회 (생성 시간, ID 순)
    pub fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.read()?.values().cloned().collect();
        sort_by_creation(&mut users);
        Ok(users)
    }

    /// 이메일로 사용자 조회 (대소문자 무관)
    ///
    /// 이메일은 유니크 제약이 없으므로 여러 레코드가 반환될 수 있습니다.
    pub fn find_by_email(&self, email: &str) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self
            .read()?
            .values()
            .filter(|user| user.has_email(email))
            .cloned()
            .collect();
        sort_by_creation(&mut users);
        Ok(users)
    }

    /// 저장된 레코드 수
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<Uuid, User>>> {
        self.records.read().context("사용자 저장소 읽기 잠금 실패")
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<Uuid, User>>> {
        self.records.write().context("사용자 저장소 쓰기 잠금 실패")
    }
}

fn not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
}

fn sort_by_creation(users: &mut [User]) {
    users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use crate::domain::entities::users::user::{EMAIL_INVALID_MESSAGE, EMAIL_REQUIRED_MESSAGE};

    fn store() -> UserRecordStore {
        UserRecordStore::new(&StoreConfig::default())
    }

    #[test]
    fn test_create_then_get() {
        let store = store();

        let alice = store.create("alice", "alice@example.com").unwrap();
        let found = store.get(&alice.id).unwrap();

        assert_eq!(found.email, "alice@example.com");
        assert_eq!(found.username, "alice");
        assert_eq!(found, alice);
    }

    #[test]
    fn test_create_valid_emails_round_trip() {
        let store = store();
        let emails = [
            "a@b.co",
            "first.last@example.com",
            "user+tag@sub.example.org",
            "UPPER@EXAMPLE.COM",
            "x_y-z@example.io",
        ];

        for email in emails {
            let user = store.create("user", email).unwrap();
            assert_eq!(store.get(&user.id).unwrap().email, email);
        }
        assert_eq!(store.len().unwrap(), emails.len());
    }

    #[test]
    fn test_create_stores_trimmed_email() {
        let store = store();

        let user = store.create("x", "  a@b.com  ").unwrap();

        assert_eq!(store.get(&user.id).unwrap().email, "a@b.com");
    }

    #[test]
    fn test_create_empty_email_is_required() {
        let store = store();

        let result = store.create("bob", "");

        assert_eq!(
            result,
            Err(AppError::ValidationError(EMAIL_REQUIRED_MESSAGE.to_string()))
        );
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_create_malformed_email_is_invalid() {
        let store = store();

        let result = store.create("carol", "not-an-email");

        assert_eq!(
            result,
            Err(AppError::ValidationError(EMAIL_INVALID_MESSAGE.to_string()))
        );
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_create_rejects_many_invalid_emails_without_persisting() {
        let store = store();

        for email in ["", " ", "plain", "a@", "@b.com", "a b@c.com", "a@@b.com"] {
            let error = store.create("user", email).unwrap_err();
            assert!(matches!(error, AppError::ValidationError(_)), "{email}");
        }
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = store();

        let a = store.create("same", "same@example.com").unwrap();
        let b = store.create("same", "same@example.com").unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = store();

        let result = store.get(&Uuid::new_v4());

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let store = store();
        let user = store.create("dave", "dave@example.com").unwrap();

        store.delete(&user.id).unwrap();

        assert!(matches!(store.get(&user.id), Err(AppError::NotFound(_))));
        assert!(matches!(store.delete(&user.id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_update_username_only_never_fails_validation() {
        let store = store();
        let user = store.create("erin", "erin@example.com").unwrap();

        for name in ["", "  ", "Erin Kim", "이린", "x".repeat(500).as_str()] {
            let changes = UserChanges {
                username: Some(name.to_string()),
                ..Default::default()
            };
            let updated = store.update(&user.id, &changes).unwrap();
            assert_eq!(updated.username, name.trim());
            assert_eq!(updated.email, "erin@example.com");
        }
    }

    #[test]
    fn test_update_invalid_email_leaves_record_unchanged() {
        let store = store();
        let user = store.create("frank", "frank@example.com").unwrap();
        let changes = UserChanges {
            username: Some("franky".to_string()),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };

        let result = store.update(&user.id, &changes);

        assert_eq!(
            result,
            Err(AppError::ValidationError(EMAIL_INVALID_MESSAGE.to_string()))
        );
        assert_eq!(store.get(&user.id).unwrap(), user);
    }

    #[test]
    fn test_update_valid_email() {
        let store = store();
        let user = store.create("grace", "grace@example.com").unwrap();
        let changes = UserChanges {
            email: Some("grace@new.example.com".to_string()),
            ..Default::default()
        };

        let updated = store.update(&user.id, &changes).unwrap();

        assert_eq!(updated.email, "grace@new.example.com");
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.created_at, user.created_at);
        assert_ne!(updated.concurrency_stamp, user.concurrency_stamp);
        assert_eq!(store.get(&user.id).unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let store = store();
        let changes = UserChanges {
            username: Some("nobody".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            store.update(&Uuid::new_v4(), &changes),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_with_stale_stamp_conflicts() {
        let store = store();
        let user = store.create("heidi", "heidi@example.com").unwrap();
        let first = UserChanges {
            username: Some("heidi2".to_string()),
            concurrency_stamp: Some(user.concurrency_stamp.clone()),
            ..Default::default()
        };
        let after_first = store.update(&user.id, &first).unwrap();

        let stale = UserChanges {
            username: Some("heidi3".to_string()),
            concurrency_stamp: Some(user.concurrency_stamp.clone()),
            ..Default::default()
        };
        let result = store.update(&user.id, &stale);

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(store.get(&user.id).unwrap(), after_first);
    }

    #[test]
    fn test_list_and_find_by_email() {
        let store = store();
        let a = store.create("a", "shared@example.com").unwrap();
        let b = store.create("b", "SHARED@example.com").unwrap();
        store.create("c", "other@example.com").unwrap();

        let all = store.list().unwrap();
        let shared = store.find_by_email("Shared@Example.com").unwrap();

        assert_eq!(all.len(), 3);
        let shared_ids: Vec<Uuid> = shared.iter().map(|u| u.id).collect();
        assert_eq!(shared_ids.len(), 2);
        assert!(shared_ids.contains(&a.id));
        assert!(shared_ids.contains(&b.id));
        assert!(store.find_by_email("missing@example.com").unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_updates_are_serialized() {
        let store = Arc::new(store());
        let user = store.create("ivan", "ivan@example.com").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                let id = user.id;
                thread::spawn(move || {
                    let changes = UserChanges {
                        email: Some(format!("ivan{}@example.com", i)),
                        ..Default::default()
                    };
                    store.update(&id, &changes).unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let final_user = store.get(&user.id).unwrap();
        assert!(final_user.email.starts_with("ivan"));
        assert!(final_user.email.ends_with("@example.com"));
        assert_eq!(store.len().unwrap(), 1);
    }
}
