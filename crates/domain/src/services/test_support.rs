//! In-memory stand-ins for the persistence and security ports.

use crate::entities::*;
use crate::errors::DomainError;
use crate::filters::{CustomerFilter, OrderFilter, ProductFilter};
use crate::repositories::*;
use crate::security::{PasswordHasher, SessionClaims, SessionTokens};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Mutex;

fn epoch() -> NaiveDateTime {
    NaiveDateTime::default()
}

#[derive(Default)]
pub struct FakeStore {
    products: Mutex<Vec<Product>>,
    customers: Mutex<Vec<(Customer, Option<String>)>>,
    orders: Mutex<Vec<Order>>,
    next_id: Mutex<i64>,
}

impl FakeStore {
    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }

    pub fn add_product(&self, name: &str, price: f64) -> i64 {
        let id = self.next_id();
        self.products.lock().unwrap().push(Product {
            id,
            name: name.to_string(),
            category: "Test".to_string(),
            price,
            stock: 10,
            created_at: epoch(),
            updated_at: epoch(),
        });
        id
    }

    pub fn add_customer(&self, name: &str, email: &str) -> i64 {
        let id = self.next_id();
        self.customers.lock().unwrap().push((
            Customer {
                id,
                name: name.to_string(),
                email: email.to_string(),
                phone: None,
                address: None,
                created_at: epoch(),
            },
            None,
        ));
        id
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    fn product_name(&self, id: i64) -> Option<String> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
    }

    fn customer_name(&self, id: i64) -> Option<String> {
        self.customers
            .lock()
            .unwrap()
            .iter()
            .find(|(c, _)| c.id == id)
            .map(|(c, _)| c.name.clone())
    }

    fn build_order(&self, id: i64, order: &NewOrder) -> Order {
        Order {
            id,
            customer_id: order.customer_id,
            product_id: order.product_id,
            quantity: order.quantity,
            total_amount: order.total_amount(),
            status: order.status,
            created_at: epoch(),
            customer_name: self.customer_name(order.customer_id),
            product_name: self.product_name(order.product_id),
        }
    }

    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.customers
            .lock()
            .unwrap()
            .iter()
            .any(|(c, _)| c.email == email && Some(c.id) != except)
    }

    fn account_of(customer: &Customer) -> Account {
        Account {
            id: customer.id,
            email: customer.email.clone(),
            first_name: None,
            last_name: None,
            created_at: customer.created_at,
        }
    }
}

#[async_trait]
impl ProductRepository for FakeStore {
    async fn find_all(&self, _filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        Ok(self.products.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let id = self.add_product(&product.name, product.price);
        let mut products = self.products.lock().unwrap();
        let saved = products.iter_mut().find(|p| p.id == id).unwrap();
        saved.category = product.category.clone();
        saved.stock = product.stock;
        Ok(saved.clone())
    }

    async fn update(&self, id: i64, product: &NewProduct) -> Result<Option<Product>, DomainError> {
        let mut products = self.products.lock().unwrap();
        Ok(products.iter_mut().find(|p| p.id == id).map(|p| {
            p.name = product.name.clone();
            p.category = product.category.clone();
            p.price = product.price;
            p.stock = product.stock;
            p.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() != before)
    }
}

#[async_trait]
impl CustomerRepository for FakeStore {
    async fn find_all(&self, _filter: &CustomerFilter) -> Result<Vec<Customer>, DomainError> {
        Ok(self.customers.lock().unwrap().iter().map(|(c, _)| c.clone()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .iter()
            .find(|(c, _)| c.id == id)
            .map(|(c, _)| c.clone()))
    }

    async fn save(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        if self.email_taken(&customer.email, None) {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }
        let id = self.add_customer(&customer.name, &customer.email);
        CustomerRepository::find_by_id(self, id)
            .await
            .map(|c| c.expect("just inserted"))
    }

    async fn update(&self, id: i64, customer: &NewCustomer) -> Result<Option<Customer>, DomainError> {
        if self.email_taken(&customer.email, Some(id)) {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }
        let mut customers = self.customers.lock().unwrap();
        Ok(customers.iter_mut().find(|(c, _)| c.id == id).map(|(c, _)| {
            c.name = customer.name.clone();
            c.email = customer.email.clone();
            c.phone = customer.phone.clone();
            c.address = customer.address.clone();
            c.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut customers = self.customers.lock().unwrap();
        let before = customers.len();
        customers.retain(|(c, _)| c.id != id);
        Ok(customers.len() != before)
    }
}

#[async_trait]
impl OrderRepository for FakeStore {
    async fn find_all(&self, filter: &OrderFilter) -> Result<Vec<Order>, DomainError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| filter.status.map_or(true, |s| o.status == s))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    async fn save(&self, order: &NewOrder) -> Result<Order, DomainError> {
        let id = self.next_id();
        let saved = self.build_order(id, order);
        self.orders.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, id: i64, order: &NewOrder) -> Result<Option<Order>, DomainError> {
        let replacement = self.build_order(id, order);
        let mut orders = self.orders.lock().unwrap();
        Ok(orders.iter_mut().find(|o| o.id == id).map(|o| {
            *o = replacement;
            o.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != id);
        Ok(orders.len() != before)
    }
}

#[async_trait]
impl AccountRepository for FakeStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountCredentials>, DomainError> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .iter()
            .find(|(c, _)| c.email == email)
            .map(|(c, hash)| AccountCredentials {
                account: Self::account_of(c),
                password_hash: hash.clone(),
            }))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .iter()
            .find(|(c, _)| c.id == id)
            .map(|(c, _)| Self::account_of(c)))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.email_taken(email, None))
    }

    async fn create(&self, account: &NewAccount) -> Result<Account, DomainError> {
        if self.email_taken(&account.email, None) {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }
        let id = self.next_id();
        let customer = Customer {
            id,
            name: account.name.clone(),
            email: account.email.clone(),
            phone: None,
            address: None,
            created_at: epoch(),
        };
        let created = Account {
            first_name: Some(account.first_name.clone()),
            last_name: Some(account.last_name.clone()),
            ..Self::account_of(&customer)
        };
        self.customers
            .lock()
            .unwrap()
            .push((customer, Some(account.password_hash.clone())));
        Ok(created)
    }
}

/// Stores `plain:<password>`; good enough to exercise the auth flow.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("plain:{}", password))
    }

    async fn verify(&self, password: &str, hash: Option<&str>) -> Result<bool, DomainError> {
        Ok(hash == Some(format!("plain:{}", password).as_str()))
    }
}

/// Tokens of the form `<id>:<role>`; `expired` always fails verification.
pub struct FakeTokens;

impl SessionTokens for FakeTokens {
    fn issue(&self, account: &Account) -> Result<String, DomainError> {
        Ok(format!("{}:{}", account.id, CUSTOMER_ROLE))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, DomainError> {
        if token == "expired" {
            return Err(DomainError::Unauthorized("Token has expired".to_string()));
        }
        let (id, role) = token
            .split_once(':')
            .ok_or_else(|| DomainError::Unauthorized("Invalid token".to_string()))?;
        Ok(SessionClaims {
            sub: id
                .parse()
                .map_err(|_| DomainError::Unauthorized("Invalid token".to_string()))?,
            email: String::new(),
            role: role.to_string(),
            iat: 0,
            exp: i64::MAX,
            jti: String::new(),
        })
    }
}
