use super::Notice;
use crate::api::ApiClient;
use crate::app::routes;
use crate::components::message_banner::MessageBanner;
use crate::models::NewUser;
use leptos::logging::log;
use leptos::*;
use leptos_router::use_navigate;
use std::time::Duration;

const REDIRECT_AFTER_LOGIN: Duration = Duration::from_millis(1000);
const SWITCH_AFTER_REGISTER: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// Prompt and button label offering the other form.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account?", "Register"),
            Self::Register => ("Already have an account?", "Login"),
        }
    }
}

/// Exchange credentials for a token and store it. Nothing is stored on failure.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<Notice, Notice> {
    let token = client
        .login(username, password)
        .await
        .map_err(|err| Notice::error(format!("Login error: {err}")))?;
    if token.access_token.is_empty() {
        return Err(Notice::error("Login failed"));
    }
    client
        .tokens()
        .set(&token.access_token)
        .map_err(|err| Notice::error(format!("Login error: {err}")))?;
    log!("[AUTH] logged in as {}", username);
    Ok(Notice::success("Login successful! Redirecting..."))
}

pub async fn register(client: &ApiClient, user: &NewUser) -> Result<Notice, Notice> {
    match client.register(user).await {
        Ok(msg) => Ok(Notice::success(format!("{msg} Please login now."))),
        Err(err) => Err(Notice::error(format!("Registration error: {err}"))),
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let (mode, set_mode) = create_signal(AuthMode::Login);
    let (message, set_message) = create_signal(None::<Notice>);

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let new_user = create_rw_signal(NewUser {
        role: "user".to_string(),
        ..NewUser::default()
    });

    let on_login = {
        let client = client.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let client = client.clone();
            let navigate = navigate.clone();
            let (user, pass) = (username.get_untracked(), password.get_untracked());
            spawn_local(async move {
                let result = login(&client, &user, &pass).await;
                let logged_in = result.is_ok();
                set_message.set(Some(result.unwrap_or_else(|notice| notice)));
                if logged_in {
                    set_timeout(
                        move || navigate(routes::HOME, Default::default()),
                        REDIRECT_AFTER_LOGIN,
                    );
                }
            });
        }
    };

    let on_register = Callback::new(move |()| {
        let client = client.clone();
        let user = new_user.get_untracked();
        spawn_local(async move {
            let result = register(&client, &user).await;
            let registered = result.is_ok();
            set_message.set(Some(result.unwrap_or_else(|notice| notice)));
            if registered {
                set_timeout(move || set_mode.set(AuthMode::Login), SWITCH_AFTER_REGISTER);
            }
        });
    });

    view! {
        <div class="auth-container">
            <h2 id="authTitle">{move || mode.get().title()}</h2>
            <Show
                when=move || mode.get() == AuthMode::Login
                fallback=move || view! { <RegistrationForm user=new_user on_submit=on_register/> }
            >
                <form id="loginForm" class="auth-form" on:submit=on_login.clone()>
                    <input
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn-primary">"Login"</button>
                </form>
            </Show>
            <p id="toggleText">
                {move || mode.get().switch_prompt().0}
                " "
                <button type="button" on:click=move |_| set_mode.update(|m| *m = m.toggled())>
                    {move || mode.get().switch_prompt().1}
                </button>
            </p>
            <MessageBanner notice=message/>
        </div>
    }
}

/// Registration fields, all bound to `user` so a rebuilt form shows exactly
/// what will be sent.
#[component]
pub fn RegistrationForm(user: RwSignal<NewUser>, on_submit: Callback<()>) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form id="registerForm" class="auth-form" on:submit=handle_submit>
            <input type="text" name="username" placeholder="Username" required
                prop:value=field_value(user, |u| &u.username)
                on:input=bind_field(user, |u, v| u.username = v)/>
            <input type="email" name="email" placeholder="Email" required
                prop:value=field_value(user, |u| &u.email)
                on:input=bind_field(user, |u, v| u.email = v)/>
            <input type="text" name="first_name" placeholder="First name"
                prop:value=field_value(user, |u| &u.first_name)
                on:input=bind_field(user, |u, v| u.first_name = v)/>
            <input type="text" name="last_name" placeholder="Last name"
                prop:value=field_value(user, |u| &u.last_name)
                on:input=bind_field(user, |u, v| u.last_name = v)/>
            <input type="password" name="password" placeholder="Password" required
                prop:value=field_value(user, |u| &u.password)
                on:input=bind_field(user, |u, v| u.password = v)/>
            <select name="role" on:change=bind_field(user, |u, v| u.role = v)>
                {ROLE_CHOICES
                    .into_iter()
                    .map(|(value, label)| view! {
                        <option value=value prop:selected=move || user.with(|u| u.role == value)>
                            {label}
                        </option>
                    })
                    .collect_view()}
            </select>
            <button type="submit" class="btn-primary">"Register"</button>
        </form>
    }
}

const ROLE_CHOICES: [(&str, &str); 2] = [("user", "User"), ("admin", "Admin")];

/// Current value of one registration field, for `prop:value`.
fn field_value(user: RwSignal<NewUser>, read: fn(&NewUser) -> &String) -> impl Fn() -> String {
    move || user.with(|user| read(user).clone())
}

/// `on:input` handler writing one registration field.
fn bind_field(user: RwSignal<NewUser>, update: fn(&mut NewUser, String)) -> impl Fn(ev::Event) + Clone {
    move |ev: ev::Event| {
        let value = event_target_value(&ev);
        user.update(|user| update(user, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggles_between_forms() {
        let mode = AuthMode::default();
        assert_eq!(mode.title(), "Login");
        assert_eq!(mode.toggled().title(), "Register");
        assert_eq!(mode.toggled().toggled(), AuthMode::Login);
        assert_eq!(mode.switch_prompt().1, "Register");
    }
}
