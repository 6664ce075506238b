use gm_core::{Gender, Locker, Member, Product, ProductType, User, UserType};

/// Creates a test Member with sensible defaults
pub fn create_test_member(name: &str) -> Member {
    let mut member = Member::new(name);
    member.phone = Some("010-1234-5678".to_string());
    member.gender = Some(Gender::Female);
    member.memo = Some("Signed up at the front desk".to_string());
    member
}

/// Creates a test Product with sensible defaults
pub fn create_test_product(name: &str) -> Product {
    let mut product = Product::new(ProductType::Membership, name, 99_000);
    product.description = Some("3-month membership".to_string());
    product.valid_days = Some(90);
    product
}

/// Creates a test Locker with sensible defaults
pub fn create_test_locker(locker_number: i32) -> Locker {
    Locker::new(locker_number)
}

/// Creates a test User; the hash is a stored string, login is not exercised here
pub fn create_test_user(username: &str, user_type: UserType) -> User {
    let mut user = User::new(username, "$2b$12$fixturehashfixturehashfixture", user_type);
    user.display_name = Some(format!("{} (test)", username));
    user
}
