// ============================================================================
// CART VIEWMODEL - LÓGICA DE LOS BOTONES "UPDATE CART"
// ============================================================================
// Anónimo: se ocultan icono, total y botones; no se registra ningún listener.
// Autenticado: cada click manda POST /update_item/ y recarga la página.
// Un fallo de red o de JSON solo se loguea: no hay recarga ni aviso al usuario.
// ============================================================================

use std::rc::Rc;
use crate::config::CartConfig;
use crate::dom::UpdateControl;
use crate::models::{CartAction, OutgoingRequest, SessionContext, UpdateControlData, UpdateItemRequest};
use crate::services::{CartTransport, PageReloader, TaskSpawner};

/// Elementos del carrito encontrados en la página
pub struct CartElements<E> {
    pub controls: Vec<E>,
    pub cart_icon: Option<E>,
    pub cart_total: Option<E>,
}

/// Listeners registrados por `bind`; al hacer drop se desregistran
pub struct CartBinding<L> {
    listeners: Vec<L>,
}

impl<L> CartBinding<L> {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// ViewModel del carrito - una instancia por vista de página
pub struct CartViewModel<T, R, S> {
    session: SessionContext,
    config: CartConfig,
    anonymous_label: String,
    transport: T,
    reloader: R,
    spawner: S,
}

impl<T, R, S> CartViewModel<T, R, S>
where
    T: CartTransport + 'static,
    R: PageReloader + 'static,
    S: TaskSpawner + 'static,
{
    pub fn new(
        session: SessionContext,
        config: CartConfig,
        anonymous_label: impl Into<String>,
        transport: T,
        reloader: R,
        spawner: S,
    ) -> Rc<Self> {
        Rc::new(Self {
            session,
            config,
            anonymous_label: anonymous_label.into(),
            transport,
            reloader,
            spawner,
        })
    }

    /// Setup de la página: ocultar (anónimo) o registrar clicks (autenticado)
    pub fn bind<E>(self: &Rc<Self>, elements: CartElements<E>) -> Result<CartBinding<E::Listener>, String>
    where
        E: UpdateControl + Clone + 'static,
    {
        let mut listeners = Vec::new();

        for control in &elements.controls {
            if self.session.is_anonymous() {
                // Icono y total se ocultan en cada vuelta; sin botones no se tocan
                self.hide(elements.cart_icon.as_ref(), &self.config.cart_icon_id)?;
                self.hide(elements.cart_total.as_ref(), &self.config.cart_total_id)?;
                control.add_class(&self.config.hidden_class)?;
            } else {
                let vm = Rc::clone(self);
                let target = control.clone();
                listeners.push(control.on_click(Box::new(move || vm.handle_click(&target)))?);
            }
        }

        if self.session.is_anonymous() {
            log::info!("🙈 Usuario anónimo: {} botones de carrito ocultos", elements.controls.len());
        } else {
            log::info!("🛒 {} botones de carrito listos", listeners.len());
        }

        Ok(CartBinding { listeners })
    }

    fn hide<E: UpdateControl>(&self, element: Option<&E>, id: &str) -> Result<(), String> {
        element
            .ok_or_else(|| format!("Element #{} not found", id))?
            .add_class(&self.config.hidden_class)
    }

    /// Lee `data-product` y `data-action` en el momento del click
    pub fn read_control<E: UpdateControl>(&self, control: &E) -> UpdateControlData {
        UpdateControlData {
            product_id: control.data(&self.config.product_data_key),
            action: control.data(&self.config.action_data_key).map(CartAction::from),
        }
    }

    /// Handler de click: vuelve a mirar la sesión y lanza el request que toque
    pub fn handle_click<E: UpdateControl>(self: &Rc<Self>, control: &E) {
        let data = self.read_control(control);
        log::info!(
            "productId: {} Action: {}",
            data.product_id.as_deref().unwrap_or("undefined"),
            data.action.as_ref().map(CartAction::as_str).unwrap_or("undefined")
        );
        log::info!("USER: {}", self.session.user.label(&self.anonymous_label));

        let vm = Rc::clone(self);
        if self.session.is_anonymous() {
            log::info!("User is not authenticated");
            self.spawner.spawn(Box::pin(async move {
                let result = vm.redirect_to_login().await;
                vm.finish(result);
            }));
        } else {
            let request = UpdateItemRequest::from(data);
            self.spawner.spawn(Box::pin(async move {
                let result = vm.update_user_order(&request).await;
                vm.finish(result);
            }));
        }
    }

    /// POST /login/ sin body
    pub async fn redirect_to_login(&self) -> Result<serde_json::Value, String> {
        self.transport.send_json(&self.login_request()).await
    }

    /// POST /update_item/ con `{"productId", "action"}`
    pub async fn update_user_order(&self, request: &UpdateItemRequest) -> Result<serde_json::Value, String> {
        log::info!("User is authenticated, sending data...");
        let outgoing = self.update_request(request)?;
        self.transport.send_json(&outgoing).await
    }

    pub fn login_request(&self) -> OutgoingRequest {
        OutgoingRequest::post_json(&self.config.login_url, &self.session.csrf_token, None)
    }

    pub fn update_request(&self, request: &UpdateItemRequest) -> Result<OutgoingRequest, String> {
        let body = serde_json::to_string(request)
            .map_err(|e| format!("Serialization error: {}", e))?;
        Ok(OutgoingRequest::post_json(
            &self.config.update_item_url,
            &self.session.csrf_token,
            Some(body),
        ))
    }

    /// Cualquier respuesta JSON recarga; un error solo queda en consola
    fn finish(&self, result: Result<serde_json::Value, String>) {
        match result {
            Ok(data) => {
                log::info!("data: {}", data);
                if let Err(e) = self.reloader.reload() {
                    log::error!("❌ {}", e);
                }
            }
            Err(e) => log::error!("❌ Uncaught (in promise): {}", e),
        }
    }
}
