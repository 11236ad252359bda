//! Tipo construível com métodos.
//!
//! [`User`] é montado a partir de [`UserOptions`] e tem o método
//! [`User::say_hi`]. O trait [`HelloWorld`] faz o papel de um método
//! acrescentado depois a um tipo qualquer: basta o tipo aderir ao trait com
//! [`add_prototype_method!`](crate::add_prototype_method).

use serde::{Deserialize, Serialize};

/// Opções para criar um [`User`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserOptions {
    /// Nome de usuário.
    pub username: String,

    /// Nome de exibição.
    pub name: String,

    /// E-mail.
    pub email: String,

    /// Senha.
    pub password: String,
}

/// Usuário.
///
/// A senha nunca aparece no `Debug` nem na serialização.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Nome de usuário.
    pub username: String,

    /// Nome de exibição.
    pub name: String,

    /// E-mail.
    pub email: String,

    /// Senha.
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Cria um novo usuário a partir das opções.
    pub fn new(options: UserOptions) -> Self {
        Self {
            username: options.username,
            name: options.name,
            email: options.email,
            password: options.password,
        }
    }

    /// Retorna `"Hello, my name is {name}"`.
    pub fn say_hi(&self) -> String {
        format!("Hello, my name is {}", self.name)
    }
}

impl From<UserOptions> for User {
    fn from(options: UserOptions) -> Self {
        Self::new(options)
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Retorna o construtor de [`User`] como valor de primeira classe.
pub fn get_user_constructor() -> fn(UserOptions) -> User {
    User::new
}

/// Método `say_hi` que devolve sempre `"Hello World!"`.
///
/// Um método inerente com o mesmo nome tem precedência na chamada com ponto;
/// use `HelloWorld::say_hi(&valor)` para chegar a este.
pub trait HelloWorld {
    /// Retorna `"Hello World!"`.
    fn say_hi(&self) -> String {
        "Hello World!".to_string()
    }
}

/// Acrescenta [`HelloWorld`] a um ou mais tipos.
///
/// ```rust
/// use kata::add_prototype_method;
/// use kata::exercises::user::HelloWorld;
///
/// struct Car;
/// add_prototype_method!(Car);
///
/// assert_eq!(Car.say_hi(), "Hello World!");
/// ```
#[macro_export]
macro_rules! add_prototype_method {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::exercises::user::HelloWorld for $ty {})+
    };
}

add_prototype_method!(User);
